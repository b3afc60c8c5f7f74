use bevy::prelude::*;

// Scene palette; hex values alongside.
pub const BACKGROUND: Color = Color::srgb(0.102, 0.102, 0.102); // #1a1a1a near-black
pub const FRAME_BAR: Color = Color::srgb(0.553, 0.431, 0.388); // #8d6e63 lighter wood
pub const FRAME_WOOD: Color = Color::srgb(0.365, 0.251, 0.216); // #5d4037 dark wood
pub const BOB_METAL: Color = Color::srgb(0.690, 0.690, 0.690); // #b0b0b0 brushed metal
pub const ROPE_LINE: Color = Color::srgb(0.878, 0.878, 0.878); // #e0e0e0 string
pub const HUD_TEXT: Color = Color::srgb(0.92, 0.92, 0.92);
pub const HUD_WARN: Color = Color::srgb(0.95, 0.55, 0.35);
