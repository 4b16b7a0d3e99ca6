use crate::inference_pipeline::labels::LabelMap;
use crate::inference_pipeline::scores::types::RankedScore;

/// Formats one result as `<score> <label>`, the score fixed to five decimals in a 7-wide field.
pub fn render_result(result: &RankedScore, labels: &LabelMap) -> String {
    format!("{:7.5} {}", result.value, labels.get(result.index))
}

pub fn render_results(results: &[RankedScore], labels: &LabelMap) -> Vec<String> {
    results
        .iter()
        .map(|result| render_result(result, labels))
        .collect()
}
