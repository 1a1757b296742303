use std::fmt::Debug;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueueError<T>
where
    T: Debug,
{
    #[error("queue is full and cannot be inserted into")]
    QueueFullInsertionError(T),

    #[error("queue is empty and no element can be removed")]
    QueueEmptyError,
}

impl<T> QueueError<T>
where
    T: Debug,
{
    pub fn into_inner(self) -> Option<T> {
        match self {
            Self::QueueFullInsertionError(elem) => Some(elem),
            Self::QueueEmptyError => None,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StackError<T>
where
    T: Debug,
{
    #[error("stack is full and cannot be pushed onto")]
    StackFullInsertionError(T),

    #[error("stack is empty and no element can be popped")]
    StackEmptyError,
}

impl<T> StackError<T>
where
    T: Debug,
{
    pub fn into_inner(self) -> Option<T> {
        match self {
            Self::StackFullInsertionError(elem) => Some(elem),
            Self::StackEmptyError => None,
        }
    }
}

/// Reasons a transfer between the queue and the reserve was refused.
///
/// None of these are fatal. Whenever one is returned, neither structure nor
/// the id counter has been touched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SupplyError {
    #[error("the queue is full, no new piece can be inserted")]
    QueueFull,

    #[error("the queue is empty, there is no piece to take")]
    QueueEmpty,

    #[error("the reserve is full, no more pieces can be reserved")]
    StackFull,

    #[error("the reserve is empty, there is no reserved piece to use")]
    StackEmpty,

    #[error("the queue needs at least {required} pieces but holds {available}")]
    InsufficientQueue { required: usize, available: usize },

    #[error("the reserve needs at least {required} pieces but holds {available}")]
    InsufficientStack { required: usize, available: usize },
}

impl<T> From<QueueError<T>> for SupplyError
where
    T: Debug,
{
    fn from(err: QueueError<T>) -> Self {
        match err {
            QueueError::QueueFullInsertionError(_) => Self::QueueFull,
            QueueError::QueueEmptyError => Self::QueueEmpty,
        }
    }
}

impl<T> From<StackError<T>> for SupplyError
where
    T: Debug,
{
    fn from(err: StackError<T>) -> Self {
        match err {
            StackError::StackFullInsertionError(_) => Self::StackFull,
            StackError::StackEmptyError => Self::StackEmpty,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("queue capacity must be at least 1")]
    ZeroQueueCapacity,

    #[error("initial fill of {initial_fill} exceeds the queue capacity of {queue_capacity}")]
    InitialFillExceedsCapacity {
        initial_fill: usize,
        queue_capacity: usize,
    },

    #[error("the piece alphabet must contain at least one kind")]
    EmptyAlphabet,

    #[error("piece kind {0:?} appears more than once in the alphabet")]
    DuplicateKind(char),
}
