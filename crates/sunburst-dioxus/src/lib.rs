// File: crates/sunburst-dioxus/src/lib.rs
// Summary: Dioxus desktop binding for the sunburst chart: SVG elements, click/hover handlers and edit forms.
// Notes:
// - UI deps live behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Form state and element views are plain Rust (always compiled) so they can be tested headless.

use sunburst_core::{NodeId, Scene, Sunburst};

/// Frame interval for the transition ticker.
pub const FRAME_MS: u64 = 16;

/// Attribute values for one `<path>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcView {
    pub id: NodeId,
    pub d: String,
    pub fill: String,
    pub stroke: String,
    pub display: &'static str,
}

/// Attribute values for one `<text>` with its `<tspan>` lines as `(dy, text)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelView {
    pub id: NodeId,
    pub transform: String,
    pub font_size: String,
    pub opacity: String,
    pub lines: Vec<(String, String)>,
}

pub fn arc_views(scene: &Scene) -> Vec<ArcView> {
    let stroke = scene.theme.stroke.to_hex();
    scene
        .arcs
        .iter()
        .map(|a| ArcView {
            id: a.id,
            d: a.d.clone(),
            fill: a.fill.to_hex(),
            stroke: stroke.clone(),
            display: if a.visible { "inline" } else { "none" },
        })
        .collect()
}

pub fn label_views(scene: &Scene) -> Vec<LabelView> {
    scene
        .labels
        .iter()
        .filter(|l| !l.lines.is_empty())
        .map(|l| LabelView {
            id: l.id,
            transform: l.transform(),
            font_size: format!("{}px", l.font_size),
            opacity: format!("{}", l.opacity),
            lines: l
                .lines
                .iter()
                .enumerate()
                .map(|(i, line)| (format!("{:.2}em", 0.35 + i as f64 * scene.line_height_em), line.clone()))
                .collect(),
        })
        .collect()
}

/// Input values of the two edit forms plus the last alert.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub selected_leaf: String,
    pub value_input: String,
    pub parent: String,
    pub new_name: String,
    pub new_value: String,
    pub alert: Option<String>,
}

fn format_value(v: f64) -> String { format!("{v}") }

impl FormState {
    pub fn new(chart: &Sunburst) -> Self {
        let mut f = Self::default();
        f.populate(chart);
        f
    }

    /// Select the first option of each dropdown and pre-fill the value input.
    pub fn populate(&mut self, chart: &Sunburst) {
        self.selected_leaf = chart.leaf_options().into_iter().next().unwrap_or_default();
        self.value_input = chart.leaf_value(&self.selected_leaf).map(format_value).unwrap_or_default();
        self.parent = chart.parent_options().into_iter().next().unwrap_or_default();
    }

    /// Selection change in the leaf dropdown.
    pub fn select_leaf(&mut self, chart: &Sunburst, name: &str) {
        self.selected_leaf = name.to_string();
        if let Some(v) = chart.leaf_value(name) {
            self.value_input = format_value(v);
        }
    }

    /// "Update" button. Returns whether the chart changed.
    pub fn submit_update(&mut self, chart: &mut Sunburst) -> bool {
        match chart.update_leaf(&self.selected_leaf, &self.value_input) {
            Ok(()) => {
                self.alert = None;
                true
            }
            Err(e) => {
                self.alert = Some(e.to_string());
                false
            }
        }
    }

    /// "Add category" button. Clears the inputs and refreshes dropdowns on success.
    pub fn submit_add(&mut self, chart: &mut Sunburst) -> bool {
        match chart.add_category(&self.parent, &self.new_name, &self.new_value) {
            Ok(_) => {
                self.alert = None;
                self.new_name.clear();
                self.new_value.clear();
                self.populate(chart);
                true
            }
            Err(e) => {
                self.alert = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;
    use std::time::{Duration, Instant};
    use sunburst_core::{tooltip, ChartConfig, Node, Tooltip};

    type Model = Result<Sunburst, String>;

    #[derive(Props, Clone, PartialEq)]
    pub struct SunburstChartProps {
        pub data: Node,
        #[props(default)]
        pub config: ChartConfig,
    }

    /// Advance transitions on a timer until the chart settles. At most one ticker runs.
    fn spawn_ticker(mut model: Signal<Model>, mut ticking: Signal<bool>) {
        if *ticking.peek() {
            return;
        }
        ticking.set(true);
        spawn(async move {
            let mut last = Instant::now();
            loop {
                tokio::time::sleep(Duration::from_millis(FRAME_MS)).await;
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f64() * 1000.0;
                last = now;
                let more = model.write().as_mut().map(|c| c.tick(dt)).unwrap_or(false);
                if !more {
                    break;
                }
            }
            ticking.set(false);
        });
    }

    /// Interactive sunburst: click an arc to zoom in, the center to zoom out; hover for details.
    #[component]
    pub fn SunburstChart(props: SunburstChartProps) -> Element {
        let mut model = use_signal(|| {
            Sunburst::new(props.data.clone(), props.config.clone()).map_err(|e| e.to_string())
        });
        let mut forms = use_signal(|| match &*model.peek() {
            Ok(chart) => FormState::new(chart),
            Err(_) => FormState::default(),
        });
        let mut hovered = use_signal(|| Option::<(Tooltip, f64, f64)>::None);
        let ticking = use_signal(|| false);

        let built = model.read().as_ref().map(|c| {
            (c.scene(), c.leaf_options(), c.parent_options(), c.config().tooltip.clone())
        }).map_err(|e| e.clone());
        let (scene, leaf_options, parent_options, tooltip_cfg) = match built {
            Ok(parts) => parts,
            Err(e) => {
                return rsx! { div { style: "color:#b00; font-family:sans-serif;", "Failed to build chart: {e}" } };
            }
        };
        let theme = scene.theme.clone();

        let width = scene.width;
        let r = scene.radius;
        let center_r = scene.center_radius;
        let group_transform = format!("translate({r},{r})");
        let arcs = arc_views(&scene);
        let labels = label_views(&scene);
        let title = scene.title.clone();
        let title_opacity = format!("{}", title.opacity);
        let label_fill = theme.label.to_hex();
        let center_fill = theme.center_text.to_hex();
        let f = forms.read().clone();
        let tip_bg = theme.tooltip_background.to_hex();
        let tip_fg = theme.tooltip_text.to_hex();
        let tip_box = hovered.read().clone().map(|(tip, x, y)| {
            let (left, top) = tooltip::position(x, y);
            (tip, left, top)
        });

        rsx! {
            div { style: "position:relative; display:flex; gap:24px; font-family:sans-serif;",
                svg {
                    width: "{width}",
                    height: "{width}",
                    g { transform: "{group_transform}",
                        g {
                            {arcs.into_iter().map(|a| {
                                let id = a.id;
                                rsx! {
                                    path {
                                        key: "{id}",
                                        d: a.d,
                                        fill: a.fill,
                                        stroke: a.stroke,
                                        display: a.display,
                                        style: "cursor:pointer",
                                        onclick: move |_| {
                                            if let Ok(c) = model.write().as_mut() { c.click(id); }
                                            spawn_ticker(model, ticking);
                                        },
                                        onmouseenter: move |evt: MouseEvent| {
                                            let p = evt.client_coordinates();
                                            let tip = model.read().as_ref().ok().and_then(|c| c.hover(id));
                                            hovered.set(tip.map(|t| (t, p.x, p.y)));
                                        },
                                        onmousemove: move |evt: MouseEvent| {
                                            let p = evt.client_coordinates();
                                            if let Some((_, x, y)) = hovered.write().as_mut() {
                                                *x = p.x;
                                                *y = p.y;
                                            }
                                        },
                                        onmouseleave: move |_| hovered.set(None),
                                    }
                                }
                            })}
                        }
                        g { pointer_events: "none", text_anchor: "middle", fill: "{label_fill}",
                            {labels.into_iter().map(|l| {
                                let id = l.id;
                                rsx! {
                                    text {
                                        key: "{id}",
                                        transform: l.transform,
                                        font_size: l.font_size,
                                        opacity: l.opacity,
                                        {l.lines.into_iter().map(|(dy, line)| rsx! {
                                            tspan { x: "0", y: "0", dy: dy, "{line}" }
                                        })}
                                    }
                                }
                            })}
                        }
                        circle {
                            r: "{center_r}",
                            fill: "transparent",
                            style: "cursor:pointer",
                            onclick: move |_| {
                                let moved = model.write().as_mut().map(|c| c.click_center()).unwrap_or(false);
                                if moved { spawn_ticker(model, ticking); }
                            },
                        }
                        text {
                            text_anchor: "middle",
                            dy: "0.35em",
                            font_size: "{title.font_size}px",
                            font_weight: "600",
                            fill: "{center_fill}",
                            opacity: "{title_opacity}",
                            pointer_events: "none",
                            "{title.text}"
                        }
                    }
                }
                div { style: "display:flex; flex-direction:column; gap:8px; min-width:240px;",
                    if let Some(msg) = &f.alert {
                        div { style: "background:#fde8e8; color:#900; padding:6px 8px; border-radius:4px;",
                            "{msg}"
                            button { style: "margin-left:8px;", onclick: move |_| forms.write().alert = None, "OK" }
                        }
                    }
                    h4 { "Update value" }
                    select {
                        value: "{f.selected_leaf}",
                        onchange: move |evt| {
                            let name = evt.value();
                            if let Ok(c) = model.read().as_ref() { forms.write().select_leaf(c, &name); }
                        },
                        for name in leaf_options {
                            option { value: "{name}", "{name}" }
                        }
                    }
                    input {
                        r#type: "number",
                        value: "{f.value_input}",
                        oninput: move |evt| forms.write().value_input = evt.value(),
                    }
                    button {
                        onclick: move |_| {
                            let changed = match model.write().as_mut() {
                                Ok(c) => forms.write().submit_update(c),
                                Err(_) => false,
                            };
                            if changed { spawn_ticker(model, ticking); }
                        },
                        "Update"
                    }
                    h4 { "Add category" }
                    select {
                        value: "{f.parent}",
                        onchange: move |evt| forms.write().parent = evt.value(),
                        for name in parent_options {
                            option { value: "{name}", "{name}" }
                        }
                    }
                    input {
                        placeholder: "Category name",
                        value: "{f.new_name}",
                        oninput: move |evt| forms.write().new_name = evt.value(),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Value",
                        value: "{f.new_value}",
                        oninput: move |evt| forms.write().new_value = evt.value(),
                    }
                    button {
                        onclick: move |_| {
                            let changed = match model.write().as_mut() {
                                Ok(c) => forms.write().submit_add(c),
                                Err(_) => false,
                            };
                            if changed { spawn_ticker(model, ticking); }
                        },
                        "Add"
                    }
                }
                if let Some((tip, left, top)) = tip_box {
                    div {
                        style: "position:fixed; left:{left}px; top:{top}px; pointer-events:none; padding:6px 10px; border-radius:4px; box-shadow:0 1px 4px rgba(0,0,0,.25); background:{tip_bg}; color:{tip_fg};",
                        strong { "{tip.name}" }
                        for (k, v) in tip.rows(&tooltip_cfg) {
                            div { strong { "{k}" } ": {v}" }
                        }
                    }
                }
            }
        }
    }

    /// Data handed to the demo window.
    #[derive(Clone)]
    struct DemoData {
        data: Node,
        config: ChartConfig,
    }

    #[component]
    fn App() -> Element {
        let demo = use_context::<DemoData>();
        rsx! { SunburstChart { data: demo.data, config: demo.config } }
    }

    /// Open a desktop window showing `data`.
    pub fn run_demo_ui(data: Node, config: ChartConfig) -> Result<(), String> {
        let size = config.width as f64 + 320.0;
        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new()
                .with_title("Sunburst")
                .with_inner_size(dioxus_desktop::LogicalSize::new(size, config.width as f64 + 40.0)),
        );
        tracing::info!(width = config.width, "launching desktop window");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context(DemoData { data, config })
            .launch(App);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("sunburst-dioxus built without `desktop` feature; enable features to run UI demo")
}
