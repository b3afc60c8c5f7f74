use bevy::prelude::*;

use crate::cradle::params::CradleParams;

/// Bob diameter in world units; colliders use half of this.
pub const BALL_SIZE: f32 = 40.0;
/// Thickness of every frame member.
pub const FRAME_THICKNESS: f32 = 15.0;
/// Horizontal clearance added around the bob row before clamping.
pub const FRAME_SIDE_MARGIN: f32 = 100.0;
/// The frame never gets narrower than this, however few bobs there are.
pub const MIN_FRAME_WIDTH: f32 = 300.0;
/// The base sticks out this much past the legs.
pub const BASE_OVERHANG: f32 = 40.0;
/// Vertical headroom the legs add beneath the rope span.
pub const FRAME_HEADROOM: f32 = 3.0 * BALL_SIZE;

/// Which frame member a piece spec describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRole {
    TopBar,
    LeftLeg,
    RightLeg,
    Base,
}

/// One static rectangle of the frame, center position plus full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePieceSpec {
    pub role: FrameRole,
    pub center: Vec2,
    pub size: Vec2,
}

/// One pendulum bob with its rope attachment. `spawn` differs from `rest`
/// only for the seeded first bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobSpec {
    pub index: usize,
    pub radius: f32,
    pub rest: Vec2,
    pub spawn: Vec2,
    pub anchor: Vec2,
}

/// Complete derived geometry for one parameter set. Building a layout has no
/// side effects; the same parameters always produce the same layout.
///
/// World coordinates are y-up with the cradle centered on the origin: the
/// rope anchors sit at `y = rope_length / 2` and the bob row rests at
/// `y = -rope_length / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct CradleLayout {
    pub params: CradleParams,
    pub frame_width: f32,
    pub frame_height: f32,
    pub frame: [FramePieceSpec; 4],
    pub bobs: Vec<BobSpec>,
}

impl CradleLayout {
    pub fn build(params: &CradleParams) -> Self {
        let n = params.ball_count as usize;
        let pitch = BALL_SIZE + params.spacing;
        let row_width = n as f32 * BALL_SIZE + (n - 1) as f32 * params.spacing;

        let frame_width = (row_width + FRAME_SIDE_MARGIN).max(MIN_FRAME_WIDTH);
        let frame_height = params.rope_length + FRAME_HEADROOM;

        let anchor_y = params.rope_length / 2.0;
        let rest_y = -params.rope_length / 2.0;

        // The top bar sits on the anchor line; the legs hang from its
        // centerline and carry the base at their feet.
        let bar_y = anchor_y + FRAME_THICKNESS / 2.0;
        let leg_x = (frame_width - FRAME_THICKNESS) / 2.0;
        let frame = [
            FramePieceSpec {
                role: FrameRole::TopBar,
                center: Vec2::new(0.0, bar_y),
                size: Vec2::new(frame_width, FRAME_THICKNESS),
            },
            FramePieceSpec {
                role: FrameRole::LeftLeg,
                center: Vec2::new(-leg_x, bar_y - frame_height / 2.0),
                size: Vec2::new(FRAME_THICKNESS, frame_height),
            },
            FramePieceSpec {
                role: FrameRole::RightLeg,
                center: Vec2::new(leg_x, bar_y - frame_height / 2.0),
                size: Vec2::new(FRAME_THICKNESS, frame_height),
            },
            FramePieceSpec {
                role: FrameRole::Base,
                center: Vec2::new(0.0, bar_y - frame_height),
                size: Vec2::new(frame_width + BASE_OVERHANG, FRAME_THICKNESS),
            },
        ];

        let first_x = -(n as f32 - 1.0) * pitch / 2.0;
        let bobs = (0..n)
            .map(|i| {
                let rest = Vec2::new(first_x + i as f32 * pitch, rest_y);
                let spawn = if i == 0 { rest + seed_offset(pitch) } else { rest };
                BobSpec {
                    index: i,
                    radius: BALL_SIZE / 2.0,
                    rest,
                    spawn,
                    anchor: Vec2::new(rest.x, anchor_y),
                }
            })
            .collect();

        Self {
            params: *params,
            frame_width,
            frame_height,
            frame,
            bobs,
        }
    }

    /// Center-to-center distance between neighbouring bobs.
    pub fn pitch(&self) -> f32 {
        BALL_SIZE + self.params.spacing
    }
}

/// Displacement applied to the first bob so a fresh scene starts moving:
/// two pitches to the left and one diameter up from its rest position.
pub fn seed_offset(pitch: f32) -> Vec2 {
    Vec2::new(-2.0 * pitch, BALL_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ball_count: u32, spacing: f32, rope_length: f32) -> CradleParams {
        CradleParams {
            ball_count,
            spacing,
            rope_length,
        }
    }

    fn piece(layout: &CradleLayout, role: FrameRole) -> FramePieceSpec {
        *layout
            .frame
            .iter()
            .find(|p| p.role == role)
            .unwrap_or_else(|| panic!("missing {role:?}"))
    }

    #[test]
    fn frame_width_tracks_the_bob_row() {
        let layout = CradleLayout::build(&params(5, 2.0, 200.0));
        // 5 * 40 + 4 * 2 = 208 of row, plus the side margin.
        assert_eq!(layout.frame_width, 308.0);
        assert_eq!(layout.frame_height, 320.0);
    }

    #[test]
    fn narrow_rows_clamp_to_the_minimum_width() {
        let layout = CradleLayout::build(&params(1, 10.0, 150.0));
        assert_eq!(layout.frame_width, MIN_FRAME_WIDTH);
    }

    #[test]
    fn single_bob_hangs_centered() {
        let layout = CradleLayout::build(&params(1, 10.0, 150.0));
        assert_eq!(layout.bobs.len(), 1);
        assert_eq!(layout.bobs[0].rest, Vec2::new(0.0, -75.0));
        assert_eq!(layout.bobs[0].anchor, Vec2::new(0.0, 75.0));
    }

    #[test]
    fn row_is_centered_and_evenly_pitched() {
        let layout = CradleLayout::build(&params(4, 6.0, 180.0));
        let xs: Vec<f32> = layout.bobs.iter().map(|b| b.rest.x).collect();
        assert_eq!(xs.first().copied(), Some(-xs.last().copied().unwrap()));
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - layout.pitch()).abs() < 1e-4);
        }
    }

    #[test]
    fn anchors_sit_one_rope_length_above_rest() {
        let layout = CradleLayout::build(&params(3, 8.0, 240.0));
        for bob in &layout.bobs {
            assert_eq!(bob.anchor.x, bob.rest.x);
            assert_eq!(bob.anchor.y - bob.rest.y, 240.0);
        }
    }

    #[test]
    fn only_the_first_bob_is_seeded() {
        let layout = CradleLayout::build(&params(5, 2.0, 200.0));
        let pitch = layout.pitch();
        assert_eq!(
            layout.bobs[0].spawn,
            layout.bobs[0].rest + Vec2::new(-2.0 * pitch, BALL_SIZE)
        );
        for bob in &layout.bobs[1..] {
            assert_eq!(bob.spawn, bob.rest);
        }
    }

    #[test]
    fn frame_members_line_up() {
        let layout = CradleLayout::build(&params(5, 2.0, 200.0));
        let bar = piece(&layout, FrameRole::TopBar);
        let left = piece(&layout, FrameRole::LeftLeg);
        let right = piece(&layout, FrameRole::RightLeg);
        let base = piece(&layout, FrameRole::Base);

        // Anchor line runs along the underside of the top bar.
        assert_eq!(bar.center.y - bar.size.y / 2.0, 100.0);
        // Legs start at the bar centerline and end at the base centerline.
        assert_eq!(left.center.y + left.size.y / 2.0, bar.center.y);
        assert_eq!(left.center.y - left.size.y / 2.0, base.center.y);
        assert_eq!(left.center.x, -right.center.x);
        // Legs stay flush with the outer edge of the frame.
        assert_eq!(left.center.x - left.size.x / 2.0, -layout.frame_width / 2.0);
        assert_eq!(base.size.x, layout.frame_width + BASE_OVERHANG);
    }

    #[test]
    fn same_parameters_rebuild_the_same_layout() {
        let p = params(7, 4.0, 160.0);
        assert_eq!(CradleLayout::build(&p), CradleLayout::build(&p));
    }
}
