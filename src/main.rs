use dp_aligner::{Aligner, Sequence};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (seq1, seq2) = match (args.next(), args.next()) {
        (Some(seq1), Some(seq2)) => (seq1, seq2),
        _ => {
            info!("No sequences given, using the defaults");
            ("GWWPDT".to_string(), "WRRKHY".to_string())
        }
    };

    println!("Aligning {} and {}", seq1, seq2);

    let aligner = Aligner::protein()?;
    let seq1: Sequence = seq1.to_uppercase().parse()?;
    let seq2: Sequence = seq2.to_uppercase().parse()?;
    let outcome = aligner.align(&seq1, &seq2)?;

    if let Some(score) = outcome.best_score() {
        println!("Best score: {}", score);
    }
    print!("{}", outcome.report());

    Ok(())
}
