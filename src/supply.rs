use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::{
    buffer::{BoundedQueue, BoundedStack},
    config::SupplyConfig,
    error::{ConfigError, SupplyError},
    piece::Piece,
    source::PieceSource,
};

/// Number of pieces exchanged by [`PieceSupply::swap_triple`].
pub const TRIPLE: usize = 3;

/// Upcoming-piece queue and reserve stack, plus the transfers between them.
///
/// Every transfer either commits all of its changes or returns an error
/// with the queue, the reserve and the id counter left exactly as they were.
/// Consuming transfers (`play`, `reserve`, `use_reserved`) draw one
/// replacement into the queue when it has room; the swaps never draw.
#[derive(Clone, Debug)]
pub struct PieceSupply<R> {
    config: SupplyConfig,
    queue: BoundedQueue<Piece>,
    stack: BoundedStack<Piece>,
    source: PieceSource<R>,
}

impl<R> PieceSupply<R>
where
    R: Rng,
{
    pub fn new(config: SupplyConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut source = PieceSource::new(config.alphabet.clone(), rng)?;
        let mut queue = BoundedQueue::new(config.queue_capacity);

        for _ in 0..config.initial_fill {
            queue
                .enqueue(source.draw())
                .map_err(|_| ConfigError::InitialFillExceedsCapacity {
                    initial_fill: config.initial_fill,
                    queue_capacity: config.queue_capacity,
                })?;
        }

        debug!(
            queue_capacity = config.queue_capacity,
            stack_capacity = config.stack_capacity,
            initial_fill = config.initial_fill,
            "piece supply ready"
        );

        Ok(Self {
            stack: BoundedStack::new(config.stack_capacity),
            config,
            queue,
            source,
        })
    }

    /// Takes the front piece out of play and draws its replacement.
    pub fn play(&mut self) -> Result<Piece, SupplyError> {
        let piece = self
            .queue
            .dequeue()
            .map_err(|err| rejected("play", err.into()))?;

        debug!(op = "play", id = piece.id(), kind = %piece.kind(), "played piece");
        self.replenish();

        Ok(piece)
    }

    /// Moves the front piece onto the reserve and draws its replacement.
    pub fn reserve(&mut self) -> Result<Piece, SupplyError> {
        if self.stack.is_full() {
            return Err(rejected("reserve", SupplyError::StackFull));
        }

        let piece = *self
            .queue
            .front()
            .ok_or_else(|| rejected("reserve", SupplyError::QueueEmpty))?;
        self.stack
            .push(piece)
            .map_err(|err| rejected("reserve", err.into()))?;

        if let Err(err) = self.queue.dequeue() {
            let _ = self.stack.pop();
            return Err(rejected("reserve", err.into()));
        }

        debug!(op = "reserve", id = piece.id(), kind = %piece.kind(), "reserved piece");
        self.replenish();

        Ok(piece)
    }

    /// Takes the top reserved piece out of play.
    pub fn use_reserved(&mut self) -> Result<Piece, SupplyError> {
        let piece = self
            .stack
            .pop()
            .map_err(|err| rejected("use_reserved", err.into()))?;

        debug!(op = "use_reserved", id = piece.id(), kind = %piece.kind(), "used reserved piece");
        self.replenish();

        Ok(piece)
    }

    /// Exchanges the queue front with the reserve top in place.
    pub fn swap_front_top(&mut self) -> Result<(), SupplyError> {
        if self.queue.is_empty() {
            return Err(rejected("swap_front_top", SupplyError::QueueEmpty));
        }

        if self.stack.is_empty() {
            return Err(rejected("swap_front_top", SupplyError::StackEmpty));
        }

        if self.queue.swap_with(0, &mut self.stack, 0).is_none() {
            return Err(rejected("swap_front_top", self.missing_pair(0, 1)));
        }

        debug!(op = "swap_front_top", "swapped front and top");
        Ok(())
    }

    /// Exchanges the first three queued pieces with the top three reserved
    /// ones, pairing front with top.
    pub fn swap_triple(&mut self) -> Result<(), SupplyError> {
        if self.queue.len() < TRIPLE {
            return Err(rejected(
                "swap_triple",
                SupplyError::InsufficientQueue {
                    required: TRIPLE,
                    available: self.queue.len(),
                },
            ));
        }

        if self.stack.len() < TRIPLE {
            return Err(rejected(
                "swap_triple",
                SupplyError::InsufficientStack {
                    required: TRIPLE,
                    available: self.stack.len(),
                },
            ));
        }

        for rank in 0..TRIPLE {
            if self.queue.swap_with(rank, &mut self.stack, rank).is_none() {
                // undo the pairs already exchanged
                for done in 0..rank {
                    let _ = self.queue.swap_with(done, &mut self.stack, done);
                }

                return Err(rejected("swap_triple", self.missing_pair(rank, TRIPLE)));
            }
        }

        debug!(op = "swap_triple", "swapped three queued and three reserved pieces");
        Ok(())
    }

    // names the side whose slot at `rank` could not be exchanged
    fn missing_pair(&self, rank: usize, required: usize) -> SupplyError {
        match (self.queue.get(rank).is_none(), required) {
            (true, 1) => SupplyError::QueueEmpty,
            (false, 1) => SupplyError::StackEmpty,
            (true, _) => SupplyError::InsufficientQueue {
                required,
                available: rank,
            },
            (false, _) => SupplyError::InsufficientStack {
                required,
                available: rank,
            },
        }
    }

    /// Draws a fresh piece onto the back of the queue.
    pub fn insert(&mut self) -> Result<Piece, SupplyError> {
        if self.queue.is_full() {
            return Err(rejected("insert", SupplyError::QueueFull));
        }

        let piece = self.source.draw();
        self.queue
            .enqueue(piece)
            .expect("queue was checked to have room");

        debug!(op = "insert", id = piece.id(), kind = %piece.kind(), "inserted piece");
        Ok(piece)
    }

    // no draw when the queue is already full, so ids are only spent on
    // pieces that enter the queue
    fn replenish(&mut self) {
        if self.queue.is_full() {
            return;
        }

        let piece = self.source.draw();
        self.queue
            .enqueue(piece)
            .expect("queue was checked to have room");

        debug!(id = piece.id(), kind = %piece.kind(), "replenished queue");
    }
}

impl<R> PieceSupply<R> {
    #[inline]
    pub fn config(&self) -> &SupplyConfig {
        &self.config
    }

    #[inline]
    pub fn queue(&self) -> &BoundedQueue<Piece> {
        &self.queue
    }

    #[inline]
    pub fn stack(&self) -> &BoundedStack<Piece> {
        &self.stack
    }

    #[inline]
    pub fn source(&self) -> &PieceSource<R> {
        &self.source
    }

    #[inline]
    pub fn next_id(&self) -> u64 {
        self.source.next_id()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            queue: self.queue.iter().copied().collect(),
            stack: self.stack.iter().copied().collect(),
        }
    }
}

fn rejected(op: &'static str, err: SupplyError) -> SupplyError {
    debug!(op, error = %err, "transfer rejected");
    err
}

/// Copy of the queue (front first) and the reserve (top first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub queue: Vec<Piece>,
    pub stack: Vec<Piece>,
}

impl Snapshot {
    pub fn queue_ids(&self) -> Vec<u64> {
        self.queue.iter().map(Piece::id).collect()
    }

    pub fn stack_ids(&self) -> Vec<u64> {
        self.stack.iter().map(Piece::id).collect()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Queue  : ")?;
        if self.queue.is_empty() {
            f.write_str("[empty queue]")?;
        } else {
            write_pieces(f, &self.queue)?;
        }

        f.write_str("\nReserve: ")?;
        if self.stack.is_empty() {
            f.write_str("[no reserved pieces]")
        } else {
            f.write_str("(top -> bottom): ")?;
            write_pieces(f, &self.stack)
        }
    }
}

fn write_pieces(f: &mut fmt::Formatter<'_>, pieces: &[Piece]) -> fmt::Result {
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{piece}")?;
    }

    Ok(())
}
