use crate::{AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // Counts follow the input at once; token results stay until the next run.
            state.set_input(text);
            Vec::new()
        }
        Msg::TokenizeClicked => {
            if state.phase() == Phase::Pending {
                // The tokenize control is disabled while a request is in flight.
                return (state, Vec::new());
            }
            if state.input().trim().is_empty() {
                state.reset_display();
                Vec::new()
            } else {
                let request_id = state.start_request();
                vec![Effect::ScheduleTokenize {
                    request_id,
                    text: state.input().to_string(),
                    model: state.model(),
                }]
            }
        }
        Msg::TokenizeCompleted {
            request_id,
            model,
            tokens,
            stats,
        } => {
            if state.pending_request() == Some(request_id) {
                state.apply_results(model, tokens, stats);
            }
            Vec::new()
        }
        Msg::ClearClicked => {
            state.abandon_request();
            state.set_input(String::new());
            state.reset_display();
            Vec::new()
        }
        Msg::ExampleClicked => {
            let example = state.models().profile(state.model()).example_text.clone();
            state.set_input(example);
            Vec::new()
        }
        Msg::ModelSelected(model) => {
            state.select_model(model);
            Vec::new()
        }
        Msg::ViewSelected(view) => {
            state.set_view(view);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
