use anyhow::{bail, Result};
use structopt::StructOpt;

use lagfib::rng::Lfg31;
use lagfib::vectors::VectorFile;

#[derive(StructOpt)]
struct EmitOpt {
    #[structopt(short = "s", long = "seed", default_value = "1")]
    /// The seed the generator is initialized with.
    seed: u32,

    #[structopt(short = "n", long = "count", default_value = "20")]
    /// How many words to print.
    count: usize,
}

#[derive(StructOpt)]
#[structopt(about = "Tools for the legacy degree-31 lagged-Fibonacci random stream.")]
enum LagfibOpt {
    /// Print words of the stream as decimal integers, one per line.
    Emit(EmitOpt),

    /// Check the stream against expected outputs from a TOML vector file.
    Verify { file: String },
}

fn verify(fname: &str) -> Result<()> {
    let vectors = VectorFile::from_toml(fname)?;

    for case in &vectors.case {
        if let Some(m) = case.check() {
            bail!(
                "seed {}: word {} is {}, expected {}",
                case.seed,
                m.index,
                m.got,
                m.expected
            );
        }
        println!("seed {}: {} words ok", case.seed, case.expect.len());
    }

    Ok(())
}

fn main() -> Result<()> {
    let opt = LagfibOpt::from_args();

    match opt {
        LagfibOpt::Emit(emitopt) => {
            let mut rng = Lfg31::new(emitopt.seed);
            for _ in 0..emitopt.count {
                println!("{}", rng.next_u32());
            }
        }

        LagfibOpt::Verify { file } => {
            return verify(&file);
        }
    }

    Ok(())
}
