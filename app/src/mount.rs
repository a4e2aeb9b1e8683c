//! Client mount gate.
//!
//! Some UI depends on state only the browser knows about (the persisted
//! theme for instance). Rendering it during SSR would produce markup that
//! differs from the first client render, so such components wait until they
//! are mounted on the client before rendering anything.
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountState {
    /// Server render, or client render before the first commit.
    #[default]
    Pending,
    /// The component has been mounted in an interactive client.
    Ready,
}

impl MountState {
    pub fn is_ready(self) -> bool {
        self == MountState::Ready
    }

    /// Moves to `Ready`. Returns `false` when already there, `Ready` is
    /// terminal.
    pub fn mark_ready(&mut self) -> bool {
        match self {
            MountState::Pending => {
                *self = MountState::Ready;
                true
            }
            MountState::Ready => false,
        }
    }
}

/// Returns a signal that flips to [`MountState::Ready`] once the calling
/// component has been mounted on the client.
///
/// Effects don't run on the server, and run after the first render on the
/// client, so the first paint always sees `Pending`.
pub fn use_mounted() -> ReadSignal<MountState> {
    let (state, set_state) = signal(MountState::Pending);
    Effect::new(move |_| {
        set_state.update(|state| {
            if state.mark_ready() {
                log::debug!("mounted on the client");
            }
        });
    });
    state
}
