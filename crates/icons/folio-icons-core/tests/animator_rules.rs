use rand::rngs::StdRng;
use rand::SeedableRng;

use folio_icons_core::{FloatParams, IconAnimator, IconFamily, IconKind, FLOAT_OFFSET_SPAN};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn dev_icon_is_closed_form_in_time() {
    let mut anim = IconAnimator::new(IconKind::Dev);
    anim.step(1.0, false);
    let pose = anim.step(10.0, false);
    approx(pose.spin[0], 2.0, 1e-6);
    approx(pose.spin[1], 3.0, 1e-6);
    assert_eq!(pose.spin[2], 0.0);
}

#[test]
fn network_icon_integrates_per_frame() {
    let mut anim = IconAnimator::new(IconKind::Network);
    for _ in 0..100 {
        // elapsed time does not matter for this icon
        anim.step(123.0, true);
    }
    approx(anim.rotation()[1], 0.5, 1e-4);
}

#[test]
fn satcom_dish_sways_within_limits() {
    let mut anim = IconAnimator::new(IconKind::Satcom);
    for i in 0..1000 {
        let t = i as f32 * 0.05;
        let pose = anim.step(t, false);
        assert!(pose.spin[1].abs() <= 0.5 + 1e-6);
        assert!(pose.spin[2].abs() <= 0.1 + 1e-6);
        approx(pose.spin[1], (t * 0.5).sin() * 0.5, 1e-6);
    }
}

#[test]
fn defense_icon_spins_at_half_rate() {
    let mut anim = IconAnimator::new(IconKind::Defense);
    let pose = anim.step(4.0, false);
    approx(pose.spin[1], 2.0, 1e-6);
}

#[test]
fn software_icon_spins_faster_when_emphasized() {
    let mut calm = IconAnimator::new(IconKind::Software);
    let mut hovered = IconAnimator::new(IconKind::Software);
    for _ in 0..10 {
        calm.step(0.0, false);
        hovered.step(0.0, true);
    }
    approx(calm.rotation()[0], 0.05, 1e-5);
    approx(calm.rotation()[1], 0.075, 1e-5);
    approx(hovered.rotation()[0], 0.2, 1e-5);
    approx(hovered.rotation()[1], 0.3, 1e-5);
}

#[test]
fn networking_skill_icon_triples_when_emphasized() {
    let mut anim = IconAnimator::new(IconKind::Networking);
    anim.step(0.0, false);
    anim.step(0.0, true);
    approx(anim.rotation()[1], 0.005 + 0.015, 1e-6);
}

#[test]
fn leadership_icon_rocks_with_emphasis_rate() {
    let mut anim = IconAnimator::new(IconKind::Leadership);
    let calm = anim.step(1.0, false);
    approx(calm.spin[2], (0.5f32).sin() * 0.2, 1e-6);
    let hovered = anim.step(1.0, true);
    approx(hovered.spin[2], (2.0f32).sin() * 0.2, 1e-6);
}

#[test]
fn pose_includes_float_bobbing_with_offset() {
    let mut a = IconAnimator::with_float_offset(IconKind::Dev, 0.0);
    let mut b = IconAnimator::with_float_offset(IconKind::Dev, 7.5);
    let pa = a.step(2.0, false);
    let pb = b.step(2.0, false);
    assert_eq!(pa.spin, pb.spin);
    assert_ne!(pa.float_y, pb.float_y);

    let (rot, y) = FloatParams::for_kind(IconKind::Dev, false).pose(9.5);
    assert_eq!(pb.float_rotation, rot);
    assert_eq!(pb.float_y, y);
}

#[test]
fn sampled_animators_bob_out_of_sync() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = IconAnimator::sample(IconKind::Network, &mut rng);
    let b = IconAnimator::sample(IconKind::Network, &mut rng);
    for anim in [&a, &b] {
        assert!(anim.float_offset() >= 0.0 && anim.float_offset() < FLOAT_OFFSET_SPAN);
        assert_eq!(anim.rotation(), [0.0; 3]);
    }
    assert_ne!(a.float_offset(), b.float_offset());

    let (mut a, mut b) = (a, b);
    assert_ne!(a.step(1.0, false).float_y, b.step(1.0, false).float_y);
}

#[test]
fn select_dispatches_by_family() {
    assert_eq!(IconKind::select(IconFamily::Experience, "mil"), IconKind::Defense);
    assert_eq!(IconKind::select(IconFamily::Skill, "mil"), IconKind::Leadership);
    for kind in IconKind::ALL {
        let again = IconKind::select(kind.family(), kind.as_str());
        // Experience labels other than the job types map to Dev.
        if kind.family() == IconFamily::Experience && kind != IconKind::Defense {
            assert_eq!(again, kind);
        }
    }
}
