use rand::rngs::StdRng;
use rand::SeedableRng;

use folio_particles_core::{
    update, FieldConfig, FieldError, InstanceTransform, MatrixSink, Particle, ParticleField,
    ParticleStore, Pointer, SampleRange, TransformBuffer, TransformSink, MATRIX_STRIDE,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn seeded_field(count: usize, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(FieldConfig::with_count(count), &mut rng).expect("default config is valid")
}

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(usize, InstanceTransform)>,
    dirty_marks: u32,
}

impl TransformSink for RecordingSink {
    fn set_transform(&mut self, index: usize, transform: &InstanceTransform) {
        self.writes.push((index, *transform));
    }

    fn mark_dirty(&mut self) {
        self.dirty_marks += 1;
    }
}

#[test]
fn single_particle_first_frame_matches_closed_form() {
    let mut store = ParticleStore::from_particles(vec![Particle::new(0.0, 0.02, 20.0, [0.0; 3])]);
    let mut buffer = TransformBuffer::default();

    update(&mut store, &mut buffer, 0.0, Pointer::new(0.0, 0.0));

    let p = store.get(0).unwrap();
    assert_eq!(p.phase, 0.01);
    assert_eq!(p.pointer_influence, [0.0, 0.0]);

    let t = 0.01f64;
    let f = 20.0f64;
    let a = t.cos() + t.sin() / 10.0;
    let b = t.sin() + (t * 2.0).cos() / 10.0;
    let x = 0.0 * a + 0.0 + (t / 10.0 * f).cos() + t.sin() * f / 10.0;
    let y = 0.0 * b + 0.0 + (t / 10.0 * f).sin() + (t * 2.0).cos() * f / 10.0;
    let z = 0.0 * b + 0.0 + (t / 10.0 * f).cos() + (t * 3.0).sin() * f / 10.0;
    let scale = ((t * 5.0).sin() + 1.5) / 2.0;

    let out = buffer.get(0).unwrap();
    assert_eq!(out.position, [x as f32, y as f32, z as f32]);
    assert_eq!(out.scale, scale as f32);

    // Sanity against the hand-expanded values.
    approx(out.position[0] as f64, 0.02f64.cos() + 0.01f64.sin() * 2.0, 1e-6);
    approx(out.position[1] as f64, 0.02f64.sin() + 0.02f64.cos() * 2.0, 1e-6);
    approx(out.position[2] as f64, 0.02f64.cos() + 0.03f64.sin() * 2.0, 1e-6);
}

#[test]
fn phase_advances_by_half_speed_per_call_regardless_of_pointer_and_clock() {
    let mut a = seeded_field(32, 11);
    let mut b = a.clone();
    let initial: Vec<(f64, f64)> = a.store().iter().map(|p| (p.phase, p.speed)).collect();

    let k = 250;
    for i in 0..k {
        let t = i as f64 * 0.016;
        a.step(t, Pointer::new(0.0, 0.0));
        // Irregular clock and a moving pointer on the second field.
        b.step(t * t + 3.0, Pointer::new((i as f64).sin(), -0.7));
    }

    for (i, (phase0, speed)) in initial.iter().enumerate() {
        let expected = {
            let mut p = *phase0;
            for _ in 0..k {
                p += speed / 2.0;
            }
            p
        };
        assert_eq!(a.store().get(i).unwrap().phase, expected);
        assert_eq!(b.store().get(i).unwrap().phase, expected);
        approx(expected, phase0 + k as f64 * speed / 2.0, 1e-9);
    }
}

#[test]
fn scale_stays_in_closed_band() {
    let mut field = seeded_field(256, 3);
    for i in 0..400 {
        let buf = field.step(i as f64, Pointer::new(0.3, -0.2));
        for t in buf.iter() {
            assert!(t.scale >= 0.25 && t.scale <= 1.25, "scale {}", t.scale);
        }
    }
}

#[test]
fn held_pointer_influence_converges_geometrically() {
    let mut field = seeded_field(4, 5);
    let target = [0.5 * 100.0, -0.25 * 100.0];
    let err = |f: &ParticleField| {
        let p = f.store().get(0).unwrap();
        (
            (target[0] - p.pointer_influence[0]).abs(),
            (target[1] - p.pointer_influence[1]).abs(),
        )
    };

    let (mut ex, mut ey) = err(&field);
    for _ in 0..200 {
        field.step(0.0, Pointer::new(0.5, -0.25));
        let (nx, ny) = err(&field);
        assert!(nx < ex, "x error did not shrink: {nx} >= {ex}");
        assert!(ny < ey, "y error did not shrink: {ny} >= {ey}");
        approx(nx, ex * 0.99, 1e-9);
        approx(ny, ey * 0.99, 1e-9);
        ex = nx;
        ey = ny;
    }

    // Every particle reads the same smoothed pointer.
    let first = field.store().get(0).unwrap().pointer_influence;
    for p in field.store().iter() {
        assert_eq!(p.pointer_influence, first);
    }
}

#[test]
fn skipped_publish_leaves_state_identical() {
    let mut published = seeded_field(64, 21);
    let mut skipped = published.clone();
    let mut sink = RecordingSink::default();

    for frame in 0..10 {
        let t = frame as f64 / 60.0;
        let pointer = Pointer::new(0.1 * frame as f64, 0.4);
        published.step(t, pointer);
        skipped.step(t, pointer);

        assert!(published.publish(Some(&mut sink)));
        if frame == 4 {
            assert!(!skipped.publish(None));
        } else {
            let mut other = RecordingSink::default();
            assert!(skipped.publish(Some(&mut other)));
        }
    }

    assert_eq!(published.store(), skipped.store());
    assert_eq!(published.buffer(), skipped.buffer());
    assert_eq!(sink.dirty_marks, 10);
    assert_eq!(sink.writes.len(), 10 * 64);
}

#[test]
fn publish_writes_slots_in_order_then_marks_dirty_once() {
    let mut field = seeded_field(8, 1);
    field.step(0.0, Pointer::default());
    let mut sink = RecordingSink::default();
    assert!(field.publish(Some(&mut sink)));
    let indices: Vec<usize> = sink.writes.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
    for (i, t) in &sink.writes {
        assert_eq!(field.buffer().get(*i), Some(t));
    }
    assert_eq!(sink.dirty_marks, 1);
}

#[test]
fn matrix_sink_receives_instance_matrices() {
    let mut field = seeded_field(3, 9);
    field.step(1.0, Pointer::new(0.2, 0.2));
    let mut out = vec![0.0f32; 3 * MATRIX_STRIDE];
    let mut sink = MatrixSink::new(&mut out);
    assert_eq!(sink.capacity(), 3);
    assert!(field.publish(Some(&mut sink)));
    assert!(sink.is_dirty());

    let mut direct = vec![0.0f32; 3 * MATRIX_STRIDE];
    assert!(field.buffer().write_matrices(&mut direct));
    assert_eq!(out, direct);
}

#[test]
fn short_sink_skips_the_whole_frame() {
    let mut field = seeded_field(4, 5);
    field.step(0.5, Pointer::new(0.1, -0.3));

    let mut out = vec![-1.0f32; 2 * MATRIX_STRIDE];
    let mut sink = MatrixSink::new(&mut out);
    assert_eq!(sink.capacity(), 2);
    assert!(!field.publish(Some(&mut sink)));
    assert!(!sink.is_dirty());
    assert!(out.iter().all(|v| *v == -1.0));

    // A sink that fits exactly is accepted on the next try.
    let mut out = vec![0.0f32; 4 * MATRIX_STRIDE];
    let mut sink = MatrixSink::new(&mut out);
    assert!(field.publish(Some(&mut sink)));
    assert!(sink.is_dirty());
}

#[test]
fn empty_pool_is_a_noop() {
    let mut field = seeded_field(0, 0);
    assert!(field.is_empty());
    let buf = field.step(10.0, Pointer::new(1.0, 1.0));
    assert!(buf.is_empty());
    assert_eq!(field.frame(), 1);

    let mut sink = RecordingSink::default();
    assert!(field.publish(Some(&mut sink)));
    assert!(sink.writes.is_empty());

    let mut store = ParticleStore::default();
    let mut buffer = TransformBuffer::default();
    update(&mut store, &mut buffer, 0.0, Pointer::default());
    assert!(buffer.is_empty());
}

#[test]
fn slot_index_is_stable_across_frames() {
    let mut field = seeded_field(16, 77);
    let offsets: Vec<[f64; 3]> = field.store().iter().map(|p| p.offset).collect();
    for frame in 0..5 {
        field.step(frame as f64, Pointer::default());
        for (i, p) in field.store().iter().enumerate() {
            assert_eq!(p.offset, offsets[i]);
        }
    }
    assert_eq!(field.buffer().len(), 16);
}

#[test]
fn invalid_config_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);

    let mut cfg = FieldConfig::default();
    cfg.ranges.speed = SampleRange::new(0.02, 0.01);
    assert_eq!(
        ParticleField::new(cfg, &mut rng).unwrap_err(),
        FieldError::InvalidRange {
            name: "speed",
            min: 0.02,
            max: 0.01
        }
    );

    let cfg = FieldConfig {
        pointer_smoothing: 0.0,
        ..FieldConfig::default()
    };
    assert!(matches!(
        ParticleField::new(cfg, &mut rng),
        Err(FieldError::InvalidSmoothing(_))
    ));

    let cfg = FieldConfig {
        pointer_scale: f64::NAN,
        ..FieldConfig::default()
    };
    assert!(matches!(
        ParticleField::new(cfg, &mut rng),
        Err(FieldError::InvalidPointerScale(_))
    ));
}

#[test]
fn custom_smoothing_changes_convergence_rate() {
    let cfg = FieldConfig {
        count: 1,
        pointer_smoothing: 0.5,
        pointer_scale: 10.0,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(cfg, &mut StdRng::seed_from_u64(2)).unwrap();
    field.step(0.0, Pointer::new(1.0, -1.0));
    assert_eq!(field.store().get(0).unwrap().pointer_influence, [5.0, -5.0]);
}

#[test]
fn from_store_takes_count_from_particles() {
    let store = ParticleStore::from_particles(vec![Particle::new(1.0, 0.01, 30.0, [1.0, 2.0, 3.0]); 5]);
    let field = ParticleField::from_store(FieldConfig::default(), store).unwrap();
    assert_eq!(field.len(), 5);
    assert_eq!(field.config().count, 5);
    assert_eq!(field.buffer().len(), 5);
}
