use argh::FromArgs;
use log::LevelFilter;
use oop_samples::Runner;
use std::io::Write;

#[derive(FromArgs)]
/// Run the object-oriented programming samples.
/// Without a lesson name, every lesson is run in order.
struct Args {
    #[argh(positional)]
    /// lesson to run, e.g. "attributes" or "method-overload".
    lesson: Option<String>,

    #[argh(switch)]
    /// print the available lessons and exit.
    list: bool,

    #[argh(switch, short = 'v')]
    /// log what each lesson does to stderr.
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let runner = Runner::default();
    let mut stdout = std::io::stdout().lock();

    if args.list {
        for lesson in runner.lessons() {
            writeln!(stdout, "{} - {}", lesson.name(), lesson.summary())?;
        }
        return Ok(());
    }

    match args.lesson {
        Some(name) => runner.run(&name, &mut stdout)?,
        None => runner.run_all(&mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}
