use tokenscope_engine::{ModelKey, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run tokenization for `text` after the artificial delay.
    ScheduleTokenize {
        request_id: RequestId,
        text: String,
        model: ModelKey,
    },
}
