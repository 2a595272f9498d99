//! `infer` command

use kairos_core::Kairos;

use crate::cli::args::InferArgs;

/// Print the pattern the expression appears to be written in.
pub fn run(kairos: &Kairos, args: &InferArgs) {
    println!("{}", kairos.find_pattern(&args.expression));
}
