//! Scene rendering. Every frame is drawn from scratch from [`WorldState`]
//! onto a [`Surface`], so the same code drives the canvas and the tests.

use crate::config::GameConfig;
use crate::model::{GrowthStage, Phase, Tree, WorldState};

const BACKGROUND: &str = "#E8F5E9";
const GROUND: &str = "#8D6E63";
const TRUNK: &str = "#5D4037";
const CANOPY_YOUNG: &str = "#81C784";
const CANOPY_MATURE: &str = "#2E7D32";
const CANOPY_DETAIL: &str = "#4CAF50";
const HUD_TEXT: &str = "#1B5E20";
const HUD_FONT: &str = "18px Arial";
const BANNER: &str = "#D32F2F";
const SHADE: &str = "rgba(0, 0, 0, 0.7)";
const SUMMARY_TEXT: &str = "#FFFFFF";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Minimal 2D drawing capability the renderer needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str);

    /// Several circles sharing one fill; surfaces may batch them into one path.
    fn fill_circles(&mut self, circles: &[(f64, f64, f64)], color: &str) {
        for &(cx, cy, r) in circles {
            self.fill_circle(cx, cy, r, color);
        }
    }
}

pub fn render(world: &WorldState, cfg: &GameConfig, phase: Phase, surface: &mut impl Surface) {
    let (w, h) = (cfg.width, cfg.height);
    surface.clear(w, h);
    surface.fill_rect(0.0, 0.0, w, h, BACKGROUND);
    surface.fill_rect(0.0, cfg.ground_line(), w, cfg.ground_height, GROUND);
    for tree in &world.trees {
        draw_tree(tree, cfg, surface);
    }
    draw_hud(world, cfg, surface);
    if phase == Phase::GameOver {
        draw_summary(world, cfg, surface);
    }
}

fn draw_tree(tree: &Tree, cfg: &GameConfig, surface: &mut impl Surface) {
    let s = tree.size;
    let trunk_w = s / 3.0;
    surface.fill_rect(tree.x - trunk_w / 2.0, tree.y - s, trunk_w, s, TRUNK);
    let canopy = match tree.stage {
        GrowthStage::Young => CANOPY_YOUNG,
        GrowthStage::Mature => CANOPY_MATURE,
    };
    surface.fill_circle(tree.x, tree.y - s, s, canopy);
    if tree.age > cfg.decoration_age {
        surface.fill_circles(
            &[
                (tree.x - s / 3.0, tree.y - s - s / 3.0, s / 4.0),
                (tree.x + s / 3.0, tree.y - s, s / 5.0),
                (tree.x, tree.y - s + s / 4.0, s / 6.0),
            ],
            CANOPY_DETAIL,
        );
    }
}

fn draw_hud(world: &WorldState, cfg: &GameConfig, surface: &mut impl Surface) {
    let lines = [
        format!("Score: {}", world.score),
        format!("Trees: {}/{}", world.trees.len(), cfg.capacity),
        format!("Time: {}s", world.ticks_remaining),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = 30.0 * (i as f64 + 1.0);
        surface.fill_text(line, 20.0, y, HUD_FONT, TextAlign::Left, HUD_TEXT);
    }
    if world.is_full(cfg) {
        surface.fill_text(
            "Forest complete! Well done!",
            cfg.width / 2.0 - 150.0,
            50.0,
            "24px Arial",
            TextAlign::Left,
            BANNER,
        );
    }
}

fn draw_summary(world: &WorldState, cfg: &GameConfig, surface: &mut impl Surface) {
    let (cx, cy) = (cfg.width / 2.0, cfg.height / 2.0);
    surface.fill_rect(0.0, 0.0, cfg.width, cfg.height, SHADE);
    surface.fill_text("Game Over!", cx, cy - 40.0, "36px Arial", TextAlign::Center, SUMMARY_TEXT);
    surface.fill_text(
        &format!("You planted {} trees!", world.trees.len()),
        cx,
        cy,
        "24px Arial",
        TextAlign::Center,
        SUMMARY_TEXT,
    );
    surface.fill_text(
        &format!("Final score: {}", world.score),
        cx,
        cy + 40.0,
        "24px Arial",
        TextAlign::Center,
        SUMMARY_TEXT,
    );
}

/// Canvas-backed surface.
pub struct CanvasSurface<'a> {
    ctx: &'a web_sys::CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: &str) {
        self.fill_circles(&[(cx, cy, r)], color);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.fill_text(text, x, y).ok();
    }

    fn fill_circles(&mut self, circles: &[(f64, f64, f64)], color: &str) {
        self.ctx.begin_path();
        for &(cx, cy, r) in circles {
            // start each arc on its own rim so no joining segment is drawn
            self.ctx.move_to(cx + r, cy);
            self.ctx.arc(cx, cy, r, 0.0, std::f64::consts::PI * 2.0).ok();
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}
