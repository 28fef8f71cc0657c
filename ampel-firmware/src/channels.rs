//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::watch::Watch;

use ampel_core::signal::{ModeCommand, SignalSnapshot};

/// Number of renderer tasks subscribed to the signal state.
pub const RENDERER_COUNT: usize = 4;

/// Channel capacity for mode commands from the button
const MODE_CHANNEL_SIZE: usize = 4;

/// Published signal state (written only by the scheduler task)
///
/// A watch rather than a channel: renderers run at their own cadence and
/// only ever want the latest snapshot, never a backlog.
pub static SIGNAL_STATE: Watch<CriticalSectionRawMutex, SignalSnapshot, RENDERER_COUNT> =
    Watch::new();

/// Mode toggle commands from the debounced button
pub static MODE_COMMANDS: Channel<CriticalSectionRawMutex, ModeCommand, MODE_CHANNEL_SIZE> =
    Channel::new();
