use rayon::prelude::*;

use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = ScanProgress::new(100, true);
    progress.inc();
    progress.finish();
}

#[test]
fn counts_every_increment() {
    let progress = ScanProgress::new_with_visibility(10, true, false);
    for _ in 0..10 {
        progress.inc();
    }
    assert_eq!(progress.position(), 10);
    progress.finish();
}

#[test]
fn clones_share_position_across_threads() {
    let progress = ScanProgress::new_with_visibility(64, false, false);

    (0..64).into_par_iter().for_each(|_| progress.clone().inc());

    assert_eq!(progress.position(), 64);
}
