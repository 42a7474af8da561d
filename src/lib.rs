use wasm_bindgen::prelude::*;

pub mod color;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod page;
pub mod render;
pub mod rng;
pub mod sim;
pub mod world;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::EngineError;

use std::cell::RefCell;
use std::rc::Rc;

use config::{ConstellationConfig, PlanetFieldConfig, SparkleConfig};
use page::{LayerPipeline, NAV_LINKS, NavState, PAGE_ORDER, TransitDiagram};
use render::Encoder;
use rng::PlatformRandom;
use sim::{Constellation, HeroDecor, PlanetField, SparkleField};

// ============================================================================
// Startup
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// `"error" | "warn" | "info" | "debug" | "trace" | "off"`
#[wasm_bindgen]
pub fn set_log_level(name: &str) {
    logging::init(logging::parse_level(name));
}

/// Negative counts from JS mean "draw nothing"
fn clamp_count(count: i32) -> usize {
    usize::try_from(count).unwrap_or(0)
}

// ============================================================================
// CONSTELLATION - nodes + proximity lines
// ============================================================================

#[wasm_bindgen]
pub struct ConstellationScene {
    scene: Constellation,
    sparkles: SparkleScene,
    encoder: Encoder,
}

impl ConstellationScene {
    pub fn from_config(config: ConstellationConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ConstellationConfig) -> Self {
        let sparkles = SparkleScene::build(SparkleConfig::constellation(config.tint));
        let scene = Constellation::new(config, &mut PlatformRandom);
        let mut encoder = Encoder::new();
        encoder.encode_constellation(&scene);
        Self { scene, sparkles, encoder }
    }
}

#[wasm_bindgen]
impl ConstellationScene {
    /// Site defaults with a custom node count
    #[wasm_bindgen(constructor)]
    pub fn new(point_count: i32) -> Self {
        Self::build(ConstellationConfig { point_count: clamp_count(point_count), ..Default::default() })
    }

    /// New random layout; markers and segments are rebuilt together
    pub fn regenerate(&mut self) {
        self.scene.regenerate(&mut PlatformRandom);
        self.encoder.encode_constellation(&self.scene);
    }

    /// Group y rotation for this frame
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        self.sparkles.tick(now_ms);
        self.scene.tick(now_ms)
    }

    /// Bumped by every regenerate; re-upload markers and segments when it changes
    pub fn generation(&self) -> u32 { self.scene.generation() }
    pub fn point_count(&self) -> usize { self.scene.points().len() }
    pub fn edge_count(&self) -> usize { self.scene.edges().len() }
    pub fn tint(&self) -> String { self.scene.config().tint.to_string() }
    pub fn line_opacity(&self) -> f32 { self.scene.config().line_opacity }
    pub fn marker_radius(&self) -> f32 { self.scene.config().marker_radius }

    // Accessors for WASM
    pub fn markers_ptr(&self) -> *const f32 { self.encoder.markers().as_ptr() }
    pub fn markers_len(&self) -> usize { self.encoder.markers().len() }
    pub fn segments_ptr(&self) -> *const f32 { self.encoder.segments().as_ptr() }
    pub fn segments_len(&self) -> usize { self.encoder.segments().len() }
    pub fn sparkles_ptr(&self) -> *const f32 { self.sparkles.points_ptr() }
    pub fn sparkles_len(&self) -> usize { self.sparkles.points_len() }
    pub fn sparkle_size(&self) -> f32 { self.sparkles.size() }
    pub fn sparkle_opacity(&self) -> f32 { self.sparkles.opacity() }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl ConstellationScene {
    /// Build from a partial JS config object
    pub fn with_config(config: JsValue) -> Result<ConstellationScene, JsValue> {
        let config: ConstellationConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| EngineError::Config(e.to_string()))?;
        Ok(Self::from_config(config)?)
    }
}

// ============================================================================
// PLANETS - floating background spheres
// ============================================================================

#[wasm_bindgen]
pub struct PlanetScene {
    field: PlanetField,
    encoder: Encoder,
}

impl PlanetScene {
    pub fn from_config(config: PlanetFieldConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PlanetFieldConfig) -> Self {
        let field = PlanetField::new(config, &mut PlatformRandom);
        let mut encoder = Encoder::new();
        encoder.encode_planets(&field);
        Self { field, encoder }
    }

    /// Apply a validated config; true if the planets were rebuilt
    pub fn apply(&mut self, config: PlanetFieldConfig) -> error::Result<bool> {
        config.validate()?;
        let rebuilt = self.field.reconfigure(config, &mut PlatformRandom);
        self.encoder.encode_planets(&self.field);
        Ok(rebuilt)
    }
}

#[wasm_bindgen]
impl PlanetScene {
    #[wasm_bindgen(constructor)]
    pub fn new(count: i32, color_mode: &str, opacity: f32, area: f32) -> Result<PlanetScene, JsValue> {
        let config = planet_config(count, color_mode, opacity, area)?;
        Ok(Self::from_config(config)?)
    }

    /// New props from the host. Count, color mode or area changes rebuild
    /// the field; an opacity change alone keeps the current planets.
    pub fn reconfigure(&mut self, count: i32, color_mode: &str, opacity: f32, area: f32) -> Result<bool, JsValue> {
        let config = planet_config(count, color_mode, opacity, area)?;
        Ok(self.apply(config)?)
    }

    /// Backdrop for light content sections
    pub fn subtle() -> PlanetScene {
        Self::build(PlanetFieldConfig::subtle())
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.field.tick(now_ms);
        self.encoder.encode_planets(&self.field);
    }

    pub fn count(&self) -> usize { self.field.planets().len() }
    pub fn opacity(&self) -> f32 { self.field.config().opacity }

    // Accessors for WASM
    pub fn instances_ptr(&self) -> *const f32 { self.encoder.instances().as_ptr() }
    pub fn instances_len(&self) -> usize { self.encoder.instances().len() }
    pub fn colors_ptr(&self) -> *const f32 { self.encoder.colors().as_ptr() }
    pub fn colors_len(&self) -> usize { self.encoder.colors().len() }
}

fn planet_config(count: i32, color_mode: &str, opacity: f32, area: f32) -> error::Result<PlanetFieldConfig> {
    Ok(PlanetFieldConfig { count: clamp_count(count), color_mode: color_mode.parse()?, opacity, area })
}

// ============================================================================
// SPARKLES - drifting dust points
// ============================================================================

#[wasm_bindgen]
pub struct SparkleScene {
    field: SparkleField,
    encoder: Encoder,
}

impl SparkleScene {
    pub fn from_config(config: SparkleConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SparkleConfig) -> Self {
        let field = SparkleField::new(config, &mut PlatformRandom);
        let mut encoder = Encoder::new();
        encoder.encode_sparkles(&field);
        Self { field, encoder }
    }
}

#[wasm_bindgen]
impl SparkleScene {
    #[wasm_bindgen(constructor)]
    pub fn new(count: i32, scale: f32, size: f32, speed: f32, opacity: f32, color: &str) -> Result<SparkleScene, JsValue> {
        let config = SparkleConfig { count: clamp_count(count), scale, size, speed, opacity, color: color.parse()? };
        Ok(Self::from_config(config)?)
    }

    /// Light gold dust for ordinary sections
    pub fn subtle() -> SparkleScene {
        Self::build(SparkleConfig::subtle())
    }

    pub fn regenerate(&mut self) {
        self.field.regenerate(&mut PlatformRandom);
        self.encoder.encode_sparkles(&self.field);
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.field.tick(now_ms);
        self.encoder.encode_sparkles(&self.field);
    }

    pub fn count(&self) -> usize { self.field.points().len() }
    pub fn size(&self) -> f32 { self.field.config().size }
    pub fn opacity(&self) -> f32 { self.field.config().opacity }
    pub fn color(&self) -> String { self.field.config().color.to_string() }

    // Accessors for WASM
    pub fn points_ptr(&self) -> *const f32 { self.encoder.sparkles().as_ptr() }
    pub fn points_len(&self) -> usize { self.encoder.sparkles().len() }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl SparkleScene {
    /// Build from a partial JS config object
    pub fn with_config(config: JsValue) -> Result<SparkleScene, JsValue> {
        let config: SparkleConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| EngineError::Config(e.to_string()))?;
        Ok(Self::from_config(config)?)
    }
}

// ============================================================================
// HERO - planet field + floating glyphs + atom
// ============================================================================

#[wasm_bindgen]
pub struct HeroScene {
    planets: PlanetScene,
    sparkles: SparkleScene,
    decor: HeroDecor,
    encoder: Encoder,
}

#[wasm_bindgen]
impl HeroScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let planets = PlanetScene::build(PlanetFieldConfig::hero());
        let sparkles = SparkleScene::build(SparkleConfig::hero());
        let decor = HeroDecor::new();
        let mut encoder = Encoder::new();
        encoder.encode_decor(&decor);
        Self { planets, sparkles, decor, encoder }
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.planets.tick(now_ms);
        self.sparkles.tick(now_ms);
        self.decor.tick(now_ms);
        self.encoder.encode_decor(&self.decor);
    }

    pub fn planet_count(&self) -> usize { self.planets.count() }
    pub fn planet_opacity(&self) -> f32 { self.planets.opacity() }
    pub fn symbol_count(&self) -> usize { self.decor.symbols().len() }

    /// Glyph text for symbol `i`, empty when out of range
    pub fn symbol_glyph(&self, i: usize) -> String {
        self.decor.symbols().get(i).map(|s| s.glyph.to_string()).unwrap_or_default()
    }

    pub fn symbol_color(&self, i: usize) -> String {
        self.decor.symbols().get(i).map(|s| s.color.to_string()).unwrap_or_default()
    }

    // Accessors for WASM
    pub fn instances_ptr(&self) -> *const f32 { self.planets.instances_ptr() }
    pub fn instances_len(&self) -> usize { self.planets.instances_len() }
    pub fn colors_ptr(&self) -> *const f32 { self.planets.colors_ptr() }
    pub fn colors_len(&self) -> usize { self.planets.colors_len() }
    pub fn decor_ptr(&self) -> *const f32 { self.encoder.decor().as_ptr() }
    pub fn decor_len(&self) -> usize { self.encoder.decor().len() }
    pub fn sparkles_ptr(&self) -> *const f32 { self.sparkles.points_ptr() }
    pub fn sparkles_len(&self) -> usize { self.sparkles.points_len() }
    pub fn sparkle_size(&self) -> f32 { self.sparkles.size() }
    pub fn sparkle_opacity(&self) -> f32 { self.sparkles.opacity() }
    pub fn sparkle_color(&self) -> String { self.sparkles.color() }
}

impl Default for HeroScene {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// NAV BAR - scrolled flag, mobile menu, scroll-to-section
// ============================================================================

#[wasm_bindgen]
pub struct NavBar {
    state: Rc<RefCell<NavState>>,
    #[cfg(target_arch = "wasm32")]
    scroll: Option<lifecycle::Scoped<web::EventListener>>,
}

#[wasm_bindgen]
impl NavBar {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(NavState::new())),
            #[cfg(target_arch = "wasm32")]
            scroll: None,
        }
    }

    /// Returns true if the scrolled flag flipped
    pub fn on_scroll(&self, offset: f64) -> bool {
        self.state.borrow_mut().on_scroll(offset)
    }

    /// Returns whether the menu is now open
    pub fn toggle_menu(&self) -> bool {
        self.state.borrow_mut().toggle_menu() == page::Menu::Open
    }

    pub fn close_menu(&self) {
        self.state.borrow_mut().close_menu();
    }

    pub fn is_scrolled(&self) -> bool { self.state.borrow().is_scrolled() }
    pub fn is_menu_open(&self) -> bool { self.state.borrow().is_menu_open() }

    /// Document offset for an element at viewport-relative `element_top`
    pub fn scroll_target(element_top: f64, current_scroll: f64) -> f64 {
        page::scroll_target(element_top, current_scroll)
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl NavBar {
    /// Track window scroll. `on_change(scrolled)` fires when the flag flips.
    pub fn attach(&mut self, on_change: js_sys::Function) -> Result<(), JsValue> {
        let window = web::window()?;
        if let Some(anchors) = web::DomAnchors::new(&window) {
            if let Err(e) = anchors.validate() {
                log::warn!("nav: {e}");
            }
        }
        self.state.borrow_mut().on_scroll(web::scroll_offset(&window));

        let state = Rc::clone(&self.state);
        let w = window.clone();
        let listener = web::EventListener::listen(&window, "scroll", move |_| {
            let mut nav = state.borrow_mut();
            if nav.on_scroll(web::scroll_offset(&w)) {
                let flag = JsValue::from_bool(nav.is_scrolled());
                drop(nav);
                if let Err(e) = on_change.call1(&JsValue::NULL, &flag) {
                    log::error!("nav on_change threw: {e:?}");
                }
            }
        })?;
        self.scroll = Some(listener);
        Ok(())
    }

    /// Stop tracking scroll
    pub fn detach(&mut self) {
        self.scroll = None;
    }

    /// Close the menu and smooth-scroll to `#id`. False if no such element.
    pub fn navigate(&self, id: &str) -> bool {
        let Ok(window) = web::window() else { return false };
        let Some(anchors) = web::DomAnchors::new(&window) else { return false };
        let current = web::scroll_offset(&window);
        let request = self.state.borrow_mut().activate_link(&anchors, id, current);
        match request {
            Some(req) => {
                web::smooth_scroll(&window, req);
                true
            }
            None => false,
        }
    }

    pub fn scroll_to_top(&self) {
        let request = self.state.borrow_mut().activate_logo();
        if let Ok(window) = web::window() {
            web::smooth_scroll(&window, request);
        }
    }
}

// ============================================================================
// PAGE LAYOUT - section order, backdrops, nav links, anchor checks
// ============================================================================

#[wasm_bindgen]
pub fn page_section_count() -> usize {
    PAGE_ORDER.len()
}

/// Anchor id of section `i`, empty for the hero and out-of-range indices
#[wasm_bindgen]
pub fn page_section_anchor(i: usize) -> String {
    PAGE_ORDER.get(i).and_then(|s| s.anchor()).unwrap_or_default().to_string()
}

/// `"hero" | "subtle" | "constellation"`, empty when out of range
#[wasm_bindgen]
pub fn page_section_backdrop(i: usize) -> String {
    PAGE_ORDER.get(i).map(|s| s.backdrop().as_str()).unwrap_or_default().to_string()
}

#[wasm_bindgen]
pub fn nav_link_count() -> usize {
    NAV_LINKS.len()
}

#[wasm_bindgen]
pub fn nav_link_anchor(i: usize) -> String {
    NAV_LINKS.get(i).and_then(|l| l.section.anchor()).unwrap_or_default().to_string()
}

#[wasm_bindgen]
pub fn nav_link_label(i: usize, mobile: bool) -> String {
    NAV_LINKS
        .get(i)
        .map(|l| if mobile { l.mobile_label } else { l.label })
        .unwrap_or_default()
        .to_string()
}

/// Every section anchor must appear exactly once in `ids`
#[wasm_bindgen]
pub fn validate_anchor_ids(ids: Vec<String>) -> Result<(), JsValue> {
    Ok(page::validate_anchors(ids.iter().map(String::as_str))?)
}

/// Same check against the live document
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn validate_document_anchors() -> Result<(), JsValue> {
    let window = web::window()?;
    let anchors = web::DomAnchors::new(&window).ok_or_else(|| EngineError::Browser("no document".into()))?;
    Ok(anchors.validate()?)
}

// ============================================================================
// DIAGRAMS - interval-driven widgets
// ============================================================================

#[wasm_bindgen]
pub struct TransitWidget {
    diagram: Rc<RefCell<TransitDiagram>>,
    #[cfg(target_arch = "wasm32")]
    timer: Option<lifecycle::Scoped<web::Interval>>,
}

#[wasm_bindgen]
impl TransitWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            diagram: Rc::new(RefCell::new(TransitDiagram::new())),
            #[cfg(target_arch = "wasm32")]
            timer: None,
        }
    }

    pub fn tick(&self) -> f32 { self.diagram.borrow_mut().tick() }
    pub fn phase(&self) -> f32 { self.diagram.borrow().phase() }
    pub fn position(&self) -> f32 { self.diagram.borrow().position() }
    pub fn is_transiting(&self) -> bool { self.diagram.borrow().is_transiting() }
    pub fn flux(&self) -> f32 { self.diagram.borrow().flux() }
    pub fn period_ms() -> u32 { page::TRANSIT_PERIOD_MS }
}

impl Default for TransitWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TransitWidget {
    /// Tick every period; `on_tick(phase)` after each step
    pub fn start(&mut self, on_tick: js_sys::Function) -> Result<(), JsValue> {
        let diagram = Rc::clone(&self.diagram);
        let timer = web::Interval::start(page::TRANSIT_PERIOD_MS, move || {
            let phase = diagram.borrow_mut().tick();
            if let Err(e) = on_tick.call1(&JsValue::NULL, &JsValue::from_f64(phase.into())) {
                log::error!("transit on_tick threw: {e:?}");
            }
        })?;
        self.timer = Some(timer);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }
}

#[wasm_bindgen]
pub struct LayerWidget {
    pipeline: Rc<RefCell<LayerPipeline>>,
    #[cfg(target_arch = "wasm32")]
    timer: Option<lifecycle::Scoped<web::Interval>>,
}

#[wasm_bindgen]
impl LayerWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            pipeline: Rc::new(RefCell::new(LayerPipeline::new())),
            #[cfg(target_arch = "wasm32")]
            timer: None,
        }
    }

    pub fn tick(&self) -> usize { self.pipeline.borrow_mut().tick() }
    pub fn active(&self) -> usize { self.pipeline.borrow().active() }
    pub fn active_name(&self) -> String { self.pipeline.borrow().active_name().to_string() }
    pub fn is_complete(&self) -> bool { self.pipeline.borrow().is_complete() }
    pub fn progress(&self) -> f32 { self.pipeline.borrow().progress() }
    pub fn period_ms() -> u32 { page::LAYER_PERIOD_MS }
}

impl Default for LayerWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl LayerWidget {
    /// Advance every period; `on_tick(active)` after each step
    pub fn start(&mut self, on_tick: js_sys::Function) -> Result<(), JsValue> {
        let pipeline = Rc::clone(&self.pipeline);
        let timer = web::Interval::start(page::LAYER_PERIOD_MS, move || {
            let active = pipeline.borrow_mut().tick();
            if let Err(e) = on_tick.call1(&JsValue::NULL, &JsValue::from_f64(active as f64)) {
                log::error!("layer on_tick threw: {e:?}");
            }
        })?;
        self.timer = Some(timer);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }
}

// ============================================================================
// FRAME DRIVER - requestAnimationFrame loop owned by JS
// ============================================================================

/// Calls `on_frame(timestamp_ms)` every frame until freed or stopped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct FrameDriver {
    frames: Option<lifecycle::Scoped<web::FrameLoop>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl FrameDriver {
    #[wasm_bindgen(constructor)]
    pub fn new(on_frame: js_sys::Function) -> Result<FrameDriver, JsValue> {
        let frames = web::FrameLoop::start(move |now| {
            if let Err(e) = on_frame.call1(&JsValue::NULL, &JsValue::from_f64(now)) {
                log::error!("frame callback threw: {e:?}");
            }
        })?;
        Ok(Self { frames: Some(frames) })
    }

    pub fn stop(&mut self) {
        self.frames = None;
    }

    pub fn is_running(&self) -> bool {
        self.frames.as_ref().is_some_and(|f| f.is_active())
    }
}
