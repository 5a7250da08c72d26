//! Hit regions for the side panel and the canvas bounds atoms are clamped to.
//!
//! The geometry here only decides what a click lands on; drawing belongs to the host.

use glam::Vec2;
use serde::Serialize;
use crate::api::config::SandboxConfig;
use crate::api::types::{Command, CycleDirection};

/// Axis-aligned rectangle, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: left/top edges are inside, right/bottom edges are not.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// The region of the canvas atoms may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl CanvasBounds {
    /// Bounds past the side panel, inset by the canvas margin.
    /// When the canvas is too small the range collapses onto its lower edge.
    pub fn from_config(config: &SandboxConfig) -> Self {
        let margin = config.canvas_margin;
        let min = Vec2::new(config.sidebar_width + margin, margin);
        let max = Vec2::new(config.canvas_width - margin, config.canvas_height - margin);
        Self { min, max: max.max(min) }
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        // Non-finite input lands on the lower edge.
        let p = Vec2::new(
            if p.x.is_finite() { p.x } else { self.min.x },
            if p.y.is_finite() { p.y } else { self.min.y },
        );
        p.clamp(self.min, self.max)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A clickable side-panel button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelButton {
    pub rect: Rect,
    pub command: Command,
}

/// Side-panel hit regions: command buttons and the atom list.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub buttons: Vec<PanelButton>,
    /// Y of the first atom row.
    pub list_top: f32,
    /// Left edge of every atom row.
    pub list_left: f32,
    /// Vertical distance between consecutive rows.
    pub row_pitch: f32,
    pub row_height: f32,
}

const BUTTON_LEFT: f32 = 16.0;
const BUTTON_TOP: f32 = 20.0;
const BUTTON_HEIGHT: f32 = 32.0;
const HALF_BUTTON_WIDTH: f32 = 140.0;
const FULL_BUTTON_WIDTH: f32 = 300.0;
const BUTTON_PITCH: f32 = 40.0;

impl PanelLayout {
    /// Classic layout: element cycling on top, one full-width button per command
    /// underneath, then the atom list.
    pub fn standard() -> Self {
        let mut buttons = vec![
            PanelButton {
                rect: Rect::new(BUTTON_LEFT, BUTTON_TOP, HALF_BUTTON_WIDTH, BUTTON_HEIGHT),
                command: Command::CycleElement(CycleDirection::Previous),
            },
            PanelButton {
                rect: Rect::new(BUTTON_LEFT + 160.0, BUTTON_TOP, HALF_BUTTON_WIDTH, BUTTON_HEIGHT),
                command: Command::CycleElement(CycleDirection::Next),
            },
        ];

        let commands = [
            Command::AddAtom,
            Command::ToggleActive,
            Command::Schedule,
            Command::Link,
            Command::RemoveSelected,
            Command::ClearAll,
        ];
        let mut y = BUTTON_TOP + 48.0;
        for command in commands {
            buttons.push(PanelButton {
                rect: Rect::new(BUTTON_LEFT, y, FULL_BUTTON_WIDTH, BUTTON_HEIGHT),
                command,
            });
            y += BUTTON_PITCH;
        }
        // Last button, the "Elements:" label, then the list
        y += 48.0 - BUTTON_PITCH + 24.0;

        Self {
            buttons,
            list_top: y,
            list_left: BUTTON_LEFT,
            row_pitch: 24.0,
            row_height: 22.0,
        }
    }

    pub fn button_at(&self, p: Vec2) -> Option<&PanelButton> {
        self.buttons.iter().find(|b| b.rect.contains(p))
    }

    /// Rectangle of the list row at `index`, for a panel of the given width.
    pub fn row_rect(&self, index: usize, sidebar_width: f32) -> Rect {
        Rect::new(
            self.list_left,
            self.list_top + index as f32 * self.row_pitch,
            sidebar_width - 2.0 * self.list_left,
            self.row_height,
        )
    }

    /// Index of the list row under `p`, if any, out of `rows` rows.
    pub fn row_at(&self, p: Vec2, rows: usize, sidebar_width: f32) -> Option<usize> {
        (0..rows).find(|&i| self.row_rect(i, sidebar_width).contains(p))
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::standard()
    }
}
