use std::future::Future;

use cid::Cid;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::CarError;
use crate::wire::block::{Block, write_block, write_header};

enum Frame {
    Header(Vec<Cid>),
    Block(Block),
}

enum Command {
    Write(Frame, oneshot::Sender<Result<(), CarError>>),
    Close,
}

/// Asynchronous CARv1 writer delivering frames to its sink in call order
///
/// Every operation is queued as soon as it is called and returns a future resolving once the
/// frame has been written to the sink. Callers may issue several operations before awaiting any
/// of them: a single task drains the queue, so frames reach the sink in the order the calls were
/// made, header first.
///
/// Must be created within a tokio runtime.
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use carwire::write::OrderedCarWriter;
///
/// let mut writer = OrderedCarWriter::new(Vec::new());
/// writer.set_roots(vec![]).await.unwrap();
/// let car = writer.close().await.unwrap();
/// assert_eq!(car.len(), 18);
/// # }
/// ```
#[derive(Debug)]
pub struct OrderedCarWriter<W> {
    commands: Option<mpsc::UnboundedSender<Command>>,
    task: Option<JoinHandle<Result<W, CarError>>>,
    roots_set: bool,
}

impl<W> OrderedCarWriter<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// Spawns the task writing to `sink`
    pub fn new(sink: W) -> Self {
        let (commands, queue) = mpsc::unbounded_channel();
        let task = tokio::spawn(drain(sink, queue));
        OrderedCarWriter {
            commands: Some(commands),
            task: Some(task),
            roots_set: false,
        }
    }

    fn enqueue(
        &self,
        frame: Frame,
    ) -> Result<oneshot::Receiver<Result<(), CarError>>, CarError> {
        let commands = self.commands.as_ref().ok_or(CarError::AlreadyClosed)?;
        let (done, written) = oneshot::channel();
        commands
            .send(Command::Write(frame, done))
            .map_err(|_| CarError::SinkFailed)?;
        Ok(written)
    }

    /// Queues the header frame, with `roots`.
    ///
    /// Fails with [CarError::RootsAlreadySet] if the header was already queued, including
    /// implicitly by [OrderedCarWriter::put].
    pub fn set_roots(
        &mut self,
        roots: Vec<Cid>,
    ) -> impl Future<Output = Result<(), CarError>> + use<W> {
        let queued = if self.commands.is_none() {
            Err(CarError::AlreadyClosed)
        } else if self.roots_set {
            Err(CarError::RootsAlreadySet)
        } else {
            self.roots_set = true;
            self.enqueue(Frame::Header(roots))
        };
        async move { queued?.await.map_err(|_| CarError::SinkFailed)? }
    }

    /// Queues a block frame.
    ///
    /// If no header was queued yet, a header without roots is queued first.
    pub fn put(&mut self, block: Block) -> impl Future<Output = Result<(), CarError>> + use<W> {
        let header = if !self.roots_set && self.commands.is_some() {
            self.roots_set = true;
            Some(self.enqueue(Frame::Header(Vec::new())))
        } else {
            None
        };
        let queued = self.enqueue(Frame::Block(block));
        async move {
            if let Some(header) = header {
                header?.await.map_err(|_| CarError::SinkFailed)??;
            }
            queued?.await.map_err(|_| CarError::SinkFailed)?
        }
    }

    /// Flushes the sink once every queued frame is written and gives it back.
    ///
    /// A header without roots is written first if none was queued. No operation is accepted
    /// afterwards, they fail with [CarError::AlreadyClosed].
    pub fn close(&mut self) -> impl Future<Output = Result<W, CarError>> + use<W> {
        if !self.roots_set && self.commands.is_some() {
            self.roots_set = true;
            // Failures surface through the task result
            let _ = self.enqueue(Frame::Header(Vec::new()));
        }
        let commands = self.commands.take();
        let task = self.task.take();
        async move {
            let (Some(commands), Some(task)) = (commands, task) else {
                return Err(CarError::AlreadyClosed);
            };
            // A send failure means the task is gone, its result tells why
            let _ = commands.send(Command::Close);
            drop(commands);
            task.await.map_err(|err| CarError::Io(std::io::Error::other(err)))?
        }
    }
}

/// Writes queued frames to `sink` until the writer is closed or dropped
async fn drain<W>(
    mut sink: W,
    mut queue: mpsc::UnboundedReceiver<Command>,
) -> Result<W, CarError>
where
    W: AsyncWrite + Unpin,
{
    tracing::trace!("ordered CAR writer started");
    let mut failed = false;
    while let Some(command) = queue.recv().await {
        let (frame, done) = match command {
            Command::Write(frame, done) => (frame, done),
            Command::Close => break,
        };
        let result = if failed {
            Err(CarError::SinkFailed)
        } else {
            match frame {
                Frame::Header(roots) => write_header(&mut sink, &roots).await.map(drop),
                Frame::Block(block) => write_block(&mut sink, &block).await.map(drop),
            }
        };
        if let Err(err) = &result
            && !failed
        {
            tracing::debug!(%err, "CAR sink write failed");
            failed = true;
        }
        // The caller may have dropped the future
        let _ = done.send(result);
    }

    if failed {
        return Err(CarError::SinkFailed);
    }
    sink.flush().await?;
    tracing::trace!("ordered CAR writer finished");
    Ok(sink)
}
