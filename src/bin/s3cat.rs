/*!
 * s3cat [-profile NAME] [-region CODE] S3_URI...: writes the contents of each
 * S3 object to stdout, in order.  Stops at the first object that cannot be
 * read.
 */

use s3cat::cli::run;
use s3cat::cli::usage;
use s3cat::cli::Args;
use std::process;

#[tokio::main(basic_scheduler)]
async fn main() {
    let _ = env_logger::try_init();

    let args = match Args::try_parse_argv(std::env::args_os()) {
        Ok(args) => args,
        Err(error) => {
            /* --help and --version are "errors" that go to stdout. */
            let _ = error.print();
            process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    if args.uris.is_empty() {
        eprint!("{}", usage());
        process::exit(1);
    }

    let mut stdout = tokio::io::stdout();
    if let Err(error) = run(&args, &mut stdout).await {
        eprintln!("s3cat: {:#}", error);
        process::exit(1);
    }
}
