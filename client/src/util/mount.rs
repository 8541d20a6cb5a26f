//! One-shot "mounted" flag for hydration-safe rendering.
//!
//! Effects never run during SSR, so anything gated on this flag renders as
//! empty on the server and on the first hydration pass, then appears once
//! the browser has mounted the component.

use leptos::prelude::*;

/// Return a signal that flips to `true` once, after the first client mount.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}
