use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::motion::improvement::{format_improvement, improvement};

const NOVASTRA_ORANGE: RGBColor = RGBColor(255, 69, 0);
const NOVASTRA_GOLD: RGBColor = RGBColor(255, 215, 0);
const BACKDROP: RGBColor = RGBColor(17, 17, 17);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metric: AttrValue,
    pub before: f64,
    pub after: f64,
    #[prop_or_default]
    pub lower_is_better: bool,
}

fn draw(canvas: HtmlCanvasElement, metric: &str, before: f64, after: f64) -> Result<(), String> {
    canvas.set_width(600);
    canvas.set_height(360);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKDROP).map_err(|e| format!("{:?}", e))?;

    let top = before.max(after).max(1.0);
    let bars = [("Before", before, NOVASTRA_GOLD), ("After", after, NOVASTRA_ORANGE)];

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(metric, ("sans-serif", 18).into_font().color(&WHITE))
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(0..bars.len(), 0.0..top * 1.1)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|x| bars.get(*x).map(|(label, _, _)| label.to_string()).unwrap_or_default())
        .label_style(("sans-serif", 14).into_font().color(&WHITE))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(
            bars.iter()
                .enumerate()
                .map(|(i, (_, value, color))| Rectangle::new([(i, 0.0), (i + 1, *value)], color.filled())),
        )
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))
}

/// Before/after bars for one case-study metric.
#[function_component]
pub fn CaseStudyChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(metric, before, after): &(AttrValue, f64, f64)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas, metric, *before, *after) {
                        warn!("case study chart not drawn: {}", e);
                    }
                }
                || ()
            },
            (props.metric.clone(), props.before, props.after),
        );
    }

    let change = format_improvement(improvement(props.before, props.after, props.lower_is_better));

    html! {
        <div class="case-study-chart">
            <canvas
                ref={canvas_ref}
                width="600"
                height="360"
                style="max-width: 100%;"
            />
            <p class="improvement">
                <span class="font-semibold">{"Improvement: "}</span>
                {change}
            </p>
        </div>
    }
}
