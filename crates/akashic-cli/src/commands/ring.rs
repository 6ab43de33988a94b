use akashic_core::{
    render_ring_svg, segment_at_angle, Allocation, ReferencePeriod, RingGeometry, SegmentView,
    SvgOptions, ValidationError,
};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use super::common::{load_config, load_timeline, parse_now};

/// Where the ring's allocation comes from, plus geometry overrides.
#[derive(Args)]
pub struct RingInput {
    /// Category weight as ID=WEIGHT, in legend order (repeatable)
    #[arg(long = "alloc", value_name = "ID=WEIGHT")]
    allocs: Vec<String>,
    /// JSON file with recorded time slices
    #[arg(long, value_name = "FILE", conflicts_with = "allocs")]
    log: Option<PathBuf>,
    /// Reference period for --log: day, session:MINUTES or rolling:HOURS
    #[arg(long, requires = "log")]
    period: Option<String>,
    /// Evaluation time for --log (RFC 3339, default: now)
    #[arg(long, requires = "log")]
    now: Option<String>,
    /// Weight that maps to the full ring
    #[arg(long)]
    capacity: Option<f64>,
    /// Ring radius (default from config)
    #[arg(long)]
    radius: Option<f64>,
    /// Stroke width (default from config)
    #[arg(long)]
    stroke: Option<f64>,
    /// Config file (default: ~/.config/akashic/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum RingAction {
    /// Print segment geometry as JSON
    Layout {
        #[command(flatten)]
        input: RingInput,
    },
    /// Print or write the ring as SVG
    Svg {
        #[command(flatten)]
        input: RingInput,
        /// Write to FILE instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Omit per-segment <title> tooltips
        #[arg(long)]
        no_titles: bool,
    },
    /// Print the segment under an angle (degrees clockwise from 12 o'clock)
    Hit {
        #[command(flatten)]
        input: RingInput,
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },
}

struct Prepared {
    allocation: Allocation,
    geometry: RingGeometry,
    view_size: f64,
}

fn parse_alloc(raw: &str) -> Result<(&str, f64), Box<dyn std::error::Error>> {
    let (id, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=WEIGHT, got '{raw}'"))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid weight in '{raw}'"))?;
    Ok((id.trim(), weight))
}

fn prepare(input: RingInput) -> Result<Prepared, Box<dyn std::error::Error>> {
    let config = load_config(input.config.as_deref())?;
    let geometry = RingGeometry {
        radius: input.radius.unwrap_or(config.ring.radius),
        stroke_width: input.stroke.unwrap_or(config.ring.stroke_width),
    };
    let categories = config.categories()?;

    let allocation = match &input.log {
        Some(path) => {
            let timeline = load_timeline(path)?;
            let period = match &input.period {
                Some(p) => p.parse::<ReferencePeriod>()?,
                None => config.period,
            };
            let now = parse_now(input.now.as_deref())?;
            let mut allocation = timeline.allocation(categories, period, now);
            if let Some(cap) = input.capacity {
                let mut rescaled = Allocation::with_capacity(cap);
                for entry in allocation.entries() {
                    rescaled.add(entry.category.clone(), entry.weight)?;
                }
                allocation = rescaled;
            }
            allocation
        }
        None => {
            let mut allocation = match input.capacity {
                Some(cap) => Allocation::with_capacity(cap),
                None => Allocation::new(),
            };
            for raw in &input.allocs {
                let (id, weight) = parse_alloc(raw)?;
                let category = categories
                    .iter()
                    .find(|c| c.id == id)
                    .ok_or_else(|| ValidationError::UnknownCategory(id.to_string()))?;
                allocation.add(category.clone(), weight)?;
            }
            allocation
        }
    };

    Ok(Prepared {
        allocation: allocation.with_remainder(config.remainder()?),
        geometry,
        view_size: config.ring.view_size,
    })
}

pub fn run(action: RingAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RingAction::Layout { input } => {
            let p = prepare(input)?;
            let layout = p.allocation.layout(&p.geometry)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        RingAction::Svg {
            input,
            output,
            no_titles,
        } => {
            let p = prepare(input)?;
            let layout = p.allocation.layout(&p.geometry)?;
            let options = SvgOptions {
                view_size: p.view_size,
                titles: !no_titles,
                ..SvgOptions::default()
            };
            let svg = render_ring_svg(&layout, &p.geometry, &options);
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    eprintln!("wrote {}", path.display());
                }
                None => println!("{svg}"),
            }
        }
        RingAction::Hit { input, angle } => {
            let p = prepare(input)?;
            let layout = p.allocation.layout(&p.geometry)?;
            let hit = segment_at_angle(&layout, angle).map(SegmentView::from);
            println!("{}", serde_json::to_string_pretty(&hit)?);
        }
    }
    Ok(())
}
