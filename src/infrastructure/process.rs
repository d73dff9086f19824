use std::io::Read;
use std::thread::JoinHandle;

/// Drain a child pipe on its own thread. The child must never block on a
/// full pipe while the parent waits for it to exit; a blocked child would
/// only ever leave through the timeout kill.
pub(crate) fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buffer);
        }
        buffer
    })
}

/// Collect what the drain thread read. Runs after the child has exited (or
/// been killed), so the pipe is closed and the thread is done or about to be.
pub(crate) fn join_pipe(handle: JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}
