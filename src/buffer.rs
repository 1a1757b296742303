mod queue;
mod stack;

pub use queue::{BoundedQueue, QueueIter};
pub use stack::{BoundedStack, StackIter};

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
