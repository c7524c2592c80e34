use tokenscope_core::{update, AppState, Effect, Msg, Phase};
use tokenscope_engine::{Estimator, ModelKey, ModelTable};

fn tokenize(state: AppState) -> AppState {
    let (state, effects) = update(state, Msg::TokenizeClicked);
    let Some(Effect::ScheduleTokenize {
        request_id,
        text,
        model,
    }) = effects.into_iter().next()
    else {
        return state;
    };
    let estimator = Estimator::builtin().unwrap();
    let tokens = estimator.tokenize_all(&text, model);
    let stats = estimator.summarize(&text, &tokens, model);
    update(
        state,
        Msg::TokenizeCompleted {
            request_id,
            model,
            tokens,
            stats,
        },
    )
    .0
}

fn long_text() -> String {
    // 1000 one-character words separated by single spaces: 1999 tokens.
    vec!["x"; 1000].join(" ")
}

#[test]
fn switching_model_reprices_without_retokenizing() {
    let state = update(AppState::default(), Msg::InputChanged(long_text())).0;
    let state = tokenize(state);
    assert_eq!(state.view().cost_display, "$0.0200");
    assert_eq!(state.view().token_count_label, "1,999");

    let (state, effects) = update(state, Msg::ModelSelected(ModelKey::Claude));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.cost_display, "$0.0030");
    assert_eq!(view.cost_model_label, "Based on Claude 3 Sonnet");
    assert_eq!(view.model_name, "Claude 3 Sonnet");
    assert_eq!(view.token_count_label, "1,999");

    // Ids keep the offsets of the model they were produced with.
    let results = state.results().unwrap();
    assert_eq!(results.model, ModelKey::Gpt);
    assert!(results.tokens.iter().all(|t| t.id < 200_000));
}

#[test]
fn switching_model_without_tokens_only_relabels() {
    let (state, _) = update(AppState::default(), Msg::ModelSelected(ModelKey::Gemini));
    let view = state.view();
    assert_eq!(view.cost_display, "$0.00");
    assert_eq!(view.cost_model_label, "Based on Gemini 1.5 Pro");
}

#[test]
fn tokenizing_after_switch_uses_new_offsets() {
    let state = update(AppState::default(), Msg::ModelSelected(ModelKey::Grook)).0;
    let state = update(state, Msg::InputChanged("Hello world!".into())).0;
    let state = tokenize(state);
    assert_eq!(state.view().id_list, "[615496, 600220, 600995, 600095]");
}

#[test]
fn switch_during_pending_keeps_request_model_for_results() {
    let state = update(AppState::default(), Msg::InputChanged("Hi".into())).0;
    let (state, effects) = update(state, Msg::TokenizeClicked);
    let (state, _) = update(state, Msg::ModelSelected(ModelKey::Claude));
    assert_eq!(state.phase(), Phase::Pending);

    let Effect::ScheduleTokenize {
        request_id,
        text,
        model,
    } = effects[0].clone();
    let estimator = Estimator::builtin().unwrap();
    let tokens = estimator.tokenize_all(&text, model);
    let stats = estimator.summarize(&text, &tokens, model);
    let (state, _) = update(
        state,
        Msg::TokenizeCompleted {
            request_id,
            model,
            tokens,
            stats,
        },
    );

    let view = state.view();
    assert_eq!(view.model, ModelKey::Claude);
    assert_eq!(view.cost_model_label, "Based on GPT-4 Turbo");
    assert_eq!(view.id_list, "[3686]");
}

#[test]
fn example_fills_input_for_active_model() {
    let table = ModelTable::builtin();
    let state = update(AppState::default(), Msg::ModelSelected(ModelKey::Claude)).0;
    let (state, effects) = update(state, Msg::ExampleClicked);

    assert!(effects.is_empty());
    assert_eq!(state.input(), table.profile(ModelKey::Claude).example_text);
    let view = state.view();
    assert_eq!(view.word_label, "13 words");
    assert_eq!(view.token_count_label, "0");
    assert!(state.results().is_none());
}
