use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use geovec::{cross, dot, VectorD3};




#[derive(Debug, Parser)]
#[clap(version = "0.1.0", about = "Dot and cross product of two 3-vectors")]
struct Opts {
    /// First operand, e.g. "1,0,0"
    #[clap(short = 'a', long, default_value = "1,0,0")]
    lhs: VectorD3,

    /// Second operand, e.g. "(0, 1, 0)"
    #[clap(short = 'b', long, default_value = "0,1,0")]
    rhs: VectorD3,

    #[clap(short = 'v', long)]
    verbose: bool,
}




// ============================================================================
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();

    SimpleLogger::new()
        .with_level(if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init()?;

    info!("lhs = {}, rhs = {}", opts.lhs, opts.rhs);

    let d: f64 = dot(&opts.lhs, &opts.rhs);
    let c = cross(&opts.lhs, &opts.rhs);

    println!("dot ......... {}", d);
    println!("cross ....... {}", c);
    println!("|cross| ..... {}", dot(&c, &c).sqrt());

    Ok(())
}
