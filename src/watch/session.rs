//! Directory watch session: validate, subscribe, dispatch until stopped.
//!
//! The notify backend delivers raw events on its own thread; they are
//! translated and pushed onto a channel, and a dedicated consumer thread
//! drains the channel into the caller's handler. The caller's blocking wait
//! runs on the calling thread with the subscription live the whole time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use notify::{Config as NotifyConfig, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::event::{ChangeEvent, Translator};
use crate::errors::{OpError, OpResult};
use crate::fs_ops::validate;

/// Watch `raw_path` (non-recursively) for change events, invoking `on_change`
/// once per observed event, until `block_until_stop` returns.
///
/// `on_change` runs on a dedicated consumer thread, concurrently with
/// whatever `block_until_stop` is doing on the calling thread. Events arrive
/// in platform delivery order; the unbounded channel absorbs bursts, but
/// platform-side buffer overflow drops are not detected. Once this function
/// returns, the subscription is released and `on_change` will not be invoked
/// again. Delivery errors from the notify backend are logged and the session
/// continues.
pub fn watch_directory<F, B>(raw_path: &str, on_change: F, block_until_stop: B) -> OpResult<()>
where
    F: FnMut(ChangeEvent) + Send + 'static,
    B: FnOnce(),
{
    let path = validate::non_blank(raw_path)?;
    validate::existing_dir(path)?;

    let (tx, rx) = mpsc::channel::<ChangeEvent>();
    let stopping = Arc::new(AtomicBool::new(false));

    let mut translator = Translator::new();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) => {
                for ev in translator.translate(&event) {
                    // The receiver is gone once the session stops; nothing to do.
                    let _ = tx.send(ev);
                }
            }
            Err(e) => warn!(error = %e, "notification delivery error; continuing"),
        },
        NotifyConfig::default(),
    )
    .map_err(|e| OpError::Watch(e.to_string()))?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(|e| OpError::Watch(e.to_string()))?;
    debug!(path = %path.display(), "watch subscription opened");

    let consumer = {
        let stopping = Arc::clone(&stopping);
        thread::spawn(move || drain(rx, &stopping, on_change))
    };

    block_until_stop();

    // Stop dispatch before releasing the subscription so the handler is never
    // invoked after this function returns. Dropping the watcher releases the
    // OS subscription and the channel sender, which ends the consumer loop.
    stopping.store(true, Ordering::Relaxed);
    drop(watcher);
    let _ = consumer.join();
    debug!(path = %path.display(), "watch subscription released");
    Ok(())
}

/// Consumer loop: deliver each queued event to the handler until the channel
/// closes or a stop is requested. Queued-but-undelivered events are discarded
/// on stop rather than flushed after the session has ended.
fn drain<F>(rx: Receiver<ChangeEvent>, stopping: &AtomicBool, mut on_change: F)
where
    F: FnMut(ChangeEvent),
{
    while let Ok(ev) = rx.recv() {
        if stopping.load(Ordering::Relaxed) {
            break;
        }
        on_change(ev);
    }
}
