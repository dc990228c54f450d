//! Prints the metadata, tangent lines and a few graph samples of the
//! trigonometric functions.
//!
//! ```text
//! cargo run --example sample_functions
//! RUST_LOG=trigeo=debug cargo run --example sample_functions
//! ```

use std::f64::consts::{FRAC_PI_4, PI};

use trigeo::function::Trig;
use trigeo::math::line_2d::{normal_line, tangent_line};
use trigeo::math::sampling::SamplingParams;
use trigeo::TrigeoError;

fn main() -> Result<(), TrigeoError> {
    // Default: WARN for everything, INFO for trigeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trigeo=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sample_functions=info".parse().unwrap_or_default())
        .add_directive("trigeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = SamplingParams::with_count(-PI, PI, 8);

    for f in Trig::ALL {
        let d = f.descriptor::<f64>();
        tracing::info!(formula = d.formula, "describing function");
        println!("{}", d.formula);
        println!(
            "  even: {}  odd: {}  continuous: {}",
            d.is_even, d.is_odd, d.is_continuous
        );
        println!(
            "  domain: [{}, {}]  image: [{}, {}]",
            d.domain.min, d.domain.max, d.image.min, d.image.max
        );

        let x = FRAC_PI_4;
        let (value, slope) = (d.eval(x), d.derivative_eval(x));
        let tangent = tangent_line::from_x(x, value, slope);
        let normal = normal_line::from_x(x, value, slope);
        println!(
            "  tangent at {x:.4}: {:.4}x + {:.4}y + {:.4} = 0",
            tangent.a, tangent.b, tangent.c
        );
        println!(
            "  normal at {x:.4}:  {:.4}x + {:.4}y + {:.4} = 0",
            normal.a, normal.b, normal.c
        );

        for p in params.points(d.evaluator())? {
            println!("  ({:>8.4}, {:>10.4})", p.x, p.y);
        }
    }

    Ok(())
}
