//! Per-frame composition of object poses from layout, pointer and the
//! active-object cycle.

use crate::constants::*;
use crate::layout::{lerp_clamped, LayoutMapper};
use crate::pointer::PointerTracker;
use crate::scene::{SceneObject, SceneObjects};
use crate::spring::{Spring, SpringConfig};
use crate::viewport::ViewportState;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// States entered during one tick; more than one only after a stall.
pub type Entered = SmallVec<[u32; 2]>;

/// Round-robin active index over `1..=len`, advancing once per period.
#[derive(Clone, Debug)]
pub struct ActiveCycle {
    len: u32,
    index: u32,
    period: Duration,
    accum: Duration,
}

impl ActiveCycle {
    pub fn new(len: u32, period: Duration) -> Self {
        Self {
            len: len.max(1),
            index: 1,
            period,
            accum: Duration::ZERO,
        }
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn advance(&mut self) -> u32 {
        self.index = if self.index >= self.len {
            1
        } else {
            self.index + 1
        };
        self.index
    }

    /// Accumulate `dt` and push the states entered, in order. After a stall
    /// longer than one full cycle only the last `len` states are pushed; the
    /// index still advances once per elapsed period.
    pub fn tick(&mut self, dt: Duration, out: &mut Entered) {
        if self.period.is_zero() {
            return;
        }
        self.accum += dt;
        let period_ns = self.period.as_nanos();
        let periods = self.accum.as_nanos() / period_ns;
        if periods == 0 {
            return;
        }
        self.accum = Duration::from_nanos((self.accum.as_nanos() % period_ns) as u64);

        let len = u128::from(self.len);
        let skipped = periods.saturating_sub(len);
        if skipped > 0 {
            // whole cycles drop out; only the remainder moves the index
            let shift = (skipped % len) as u32;
            self.index = (self.index - 1 + shift) % self.len + 1;
            log::debug!("[cycle] stall: {} states passed without a kick", skipped);
        }
        for _ in 0..periods.min(len) {
            out.push(self.advance());
        }
    }
}

/// Kick offset: magnitude `floor(r * 2)` (0 or 1) with a random sign.
pub fn kick_offset<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let magnitude = (rng.gen::<f32>() * 2.0).floor();
    let sign = if rng.gen::<f32>().round() != 0.0 {
        1.0
    } else {
        -1.0
    };
    magnitude * sign
}

/// Ambient drift applied around each floating object.
#[derive(Clone, Copy, Debug)]
pub struct FloatBob {
    pub phase: f64,
}

impl FloatBob {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            phase: rng.gen::<f64>() * FLOAT_PHASE_MAX as f64,
        }
    }

    /// Rotation (Euler XYZ) and translation of the float parent at `elapsed`.
    pub fn offsets(&self, elapsed_sec: f64) -> (Vec3, Vec3) {
        let t = ((self.phase + elapsed_sec) / 4.0 * FLOAT_SPEED as f64) as f32;
        let (s, c) = (t.sin(), t.cos());
        let rotation = Vec3::new(c / 8.0, s / 8.0, s / 20.0) * FLOAT_ROTATION_INTENSITY;
        let y = crate::layout::remap(s / 10.0, -0.1, 0.1, FLOAT_RANGE[0], FLOAT_RANGE[1]);
        (rotation, Vec3::new(0.0, y * FLOAT_INTENSITY, 0.0))
    }
}

/// Final transform of one drawable object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectPose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub float_rotation: Vec3,
    pub float_offset: Vec3,
    pub color: [f32; 3],
}

impl ObjectPose {
    pub fn model_matrix(&self) -> Mat4 {
        let parent = Mat4::from_rotation_translation(euler_xyz(self.float_rotation), self.float_offset);
        let local = Mat4::from_scale_rotation_translation(
            self.scale,
            euler_xyz(self.rotation),
            self.position,
        );
        parent * local
    }
}

#[inline]
fn euler_xyz(r: Vec3) -> Quat {
    Quat::from_euler(glam::EulerRot::XYZ, r.x, r.y, r.z)
}

pub struct SceneComposer<R: Rng> {
    objects: SceneObjects,
    layout: LayoutMapper,
    pointer: PointerTracker,
    cycle: ActiveCycle,
    kicks: Vec<Spring>,
    bobs: Vec<FloatBob>,
    elapsed_sec: f64,
    rng: R,
}

impl<R: Rng> SceneComposer<R> {
    pub fn new(objects: SceneObjects, mut rng: R) -> Self {
        let spring = SpringConfig::default();
        let kicks = objects
            .floating
            .iter()
            .map(|o| Spring::new(spring, o.transform.rotation.z))
            .collect();
        let bobs = objects
            .floating
            .iter()
            .map(|_| FloatBob::random(&mut rng))
            .collect();
        let mut composer = Self {
            layout: LayoutMapper::new(objects.bounds),
            pointer: PointerTracker::new(spring),
            cycle: ActiveCycle::new(
                objects.cycle_len,
                Duration::from_millis(ACTIVE_CYCLE_PERIOD_MS),
            ),
            objects,
            kicks,
            bobs,
            elapsed_sec: 0.0,
            rng,
        };
        // the first state is active from the start
        let first = composer.cycle.index();
        composer.enter(first);
        composer
    }

    pub fn set_viewport(&mut self, viewport: Option<&ViewportState>) {
        self.layout.update(viewport);
    }

    pub fn on_pointer(&mut self, x: f32, y: f32) {
        self.pointer.sample(x, y);
    }

    #[inline]
    pub fn layout(&self) -> &LayoutMapper {
        &self.layout
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn objects(&self) -> &SceneObjects {
        &self.objects
    }

    #[inline]
    pub fn active_index(&self) -> u32 {
        self.cycle.index()
    }

    /// Advance springs, float time and the active cycle. Returns the states
    /// entered during this tick.
    pub fn tick(&mut self, dt: Duration) -> Entered {
        let dt_sec = dt.as_secs_f32();
        self.elapsed_sec += dt.as_secs_f64();
        self.pointer.step(dt_sec);
        for k in &mut self.kicks {
            k.step(dt_sec);
        }
        let mut entered = Entered::new();
        self.cycle.tick(dt, &mut entered);
        for &state in &entered {
            self.enter(state);
        }
        entered
    }

    fn enter(&mut self, state: u32) {
        let Some(i) = (state as usize).checked_sub(1) else {
            return;
        };
        let Some(obj) = self.objects.floating.get(i) else {
            return;
        };
        let target = obj.transform.rotation.z + kick_offset(&mut self.rng);
        self.kicks[i].set_target(target);
        log::debug!("[composer] active {} ({}) kick -> {:.2}", state, obj.name, target);
    }

    fn floating_pose(&self, i: usize, obj: &SceneObject) -> ObjectPose {
        let [sx, sy] = self.pointer.smoothed();
        let base = self.layout.place(obj.transform.position);
        let rot = obj.transform.rotation;

        let a = obj.multiplier * ROTATION_SPAN_PER_MULTIPLIER;
        let yaw = lerp_clamped(sx, rot.x - a, rot.x + a);
        let pitch = lerp_clamped(sy, rot.y - a, rot.y + a);

        let k = obj.multiplier * self.layout.responsive_scale() * TRAVEL_SPAN_PER_MULTIPLIER;
        let x = lerp_clamped(sx, base.x - k, base.x + k);
        let y = lerp_clamped(sy, base.y + k, base.y - k);

        let (float_rotation, float_offset) = self.bobs[i].offsets(self.elapsed_sec);
        ObjectPose {
            position: Vec3::new(x, y, base.z),
            rotation: Vec3::new(pitch, yaw, self.kicks[i].value()),
            scale: obj.transform.scale,
            float_rotation,
            float_offset,
            color: obj.transform.color,
        }
    }

    fn logo_pose(obj: &SceneObject) -> ObjectPose {
        ObjectPose {
            position: Vec3::ZERO,
            rotation: obj.transform.rotation,
            scale: obj.transform.scale,
            float_rotation: Vec3::ZERO,
            float_offset: Vec3::ZERO,
            color: obj.transform.color,
        }
    }

    /// Poses for every drawable object: floating objects in roster order,
    /// then the logo.
    pub fn compose_into(&self, out: &mut Vec<ObjectPose>) {
        out.clear();
        out.extend(
            self.objects
                .floating
                .iter()
                .enumerate()
                .map(|(i, o)| self.floating_pose(i, o)),
        );
        if let Some(logo) = &self.objects.logo {
            out.push(Self::logo_pose(logo));
        }
    }

    pub fn poses(&self) -> Vec<ObjectPose> {
        let mut out = Vec::with_capacity(self.objects.len());
        self.compose_into(&mut out);
        out
    }
}
