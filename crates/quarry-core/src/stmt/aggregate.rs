#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AggregateFunction {
    #[default]
    None,
    Count,
    Sum,
    Average,
    Min,
    Max,
}
