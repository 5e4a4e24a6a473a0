// Host-side tests for mount cancellation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mount {
    include!("../src/mount.rs");
}

use mount::*;

#[test]
fn fresh_mount_is_current() {
    let mounts = MountGeneration::new();
    let ticket = mounts.begin();
    assert!(mounts.is_current(ticket));
}

#[test]
fn unmount_during_init_cancels_that_mount() {
    let mounts = MountGeneration::new();
    let ticket = mounts.begin();
    // unmount arrives while init is suspended on the GPU
    mounts.cancel();
    assert!(!mounts.is_current(ticket));
}

#[test]
fn remount_makes_the_older_init_stale() {
    let mounts = MountGeneration::new();
    let first = mounts.begin();
    mounts.cancel();
    let second = mounts.begin();
    assert!(!mounts.is_current(first));
    assert!(mounts.is_current(second));
    assert_ne!(first, second);
}

#[test]
fn unmount_after_a_completed_mount_is_harmless() {
    let mounts = MountGeneration::default();
    let ticket = mounts.begin();
    assert!(mounts.is_current(ticket));
    mounts.cancel();
    mounts.cancel();
    let next = mounts.begin();
    assert!(mounts.is_current(next));
}
