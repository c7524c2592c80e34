use serde::Serialize;
use tokenscope_core::{AppState, AppViewModel, Phase, TokenView};
use tokenscope_engine::{ModelKey, ResolvedToken, Stats, TextCounts};

/// Terminal rendering of the view model, one string per line.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Model: {} ({})", view.model_name, view.model));
    lines.push(format!(
        "Characters: {} | {}",
        view.char_count_label, view.word_label
    ));
    lines.push(format!(
        "Tokens: {} | {}",
        view.token_count_label, view.avg_label
    ));
    lines.push(format!(
        "Cost: {} ({})",
        view.cost_display, view.cost_model_label
    ));

    if view.phase == Phase::Pending {
        lines.push(format!("{}...", view.tokenize_label));
        return lines;
    }

    match (view.empty_hint, view.view) {
        (Some(hint), _) => lines.push(hint.to_string()),
        (None, TokenView::Text) => lines.push(
            view.chips
                .iter()
                .map(|chip| format!("[{} {}]", chip.id_label, chip.text))
                .collect::<Vec<_>>()
                .join(" "),
        ),
        (None, TokenView::Ids) => lines.push(view.id_list.clone()),
    }

    lines
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    model: ModelKey,
    counts: &'a TextCounts,
    tokens: &'a [ResolvedToken],
    stats: Option<&'a Stats>,
}

/// JSON report of the latest results; tokens are empty and stats null before any run.
pub fn render_json(state: &AppState) -> serde_json::Result<String> {
    let results = state.results();
    let report = JsonReport {
        model: results.map_or(state.model(), |r| r.model),
        counts: state.counts(),
        tokens: results.map(|r| r.tokens.as_slice()).unwrap_or_default(),
        stats: results.map(|r| &r.stats),
    };
    serde_json::to_string_pretty(&report)
}
