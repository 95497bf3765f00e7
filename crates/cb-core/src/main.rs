use std::io::{self, IsTerminal, Read};

use cb_backend::DatasetLoader;
use cb_core::batch::{render_batch, run_batch, BatchRequest};
use cb_core::browser::{BrowserOptions, CountryBrowser};
use cb_core::cli::{help_text, parse_args};
use cb_core::config::{config_path, Config};
use cb_core::logging;
use cb_core::renderer::BrowserRenderer;
use cb_core::repl::{run_repl, run_session};
use cb_core::style::Style;
use tracing::warn;

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("hint: run with --help for usage");
            std::process::exit(2);
        }
    };

    if args.help {
        println!("{}", help_text());
        return;
    }

    if args.version {
        println!("countrybrowser {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let (mut config, config_error) = match Config::load_from(&config_path()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    args.apply(&mut config);

    if let Err(e) = logging::init(&config.log) {
        eprintln!("warning: {e}");
    }
    if let Some(e) = config_error {
        warn!(error = %e, "using default configuration");
    }

    // One-shot when asked via arguments or when stdin is a pipe.
    let stdin_is_pipe = !io::stdin().is_terminal();
    let request = args.batch_request().or_else(|| {
        if !stdin_is_pipe {
            return None;
        }
        let mut buf = String::new();
        match io::stdin().read_to_string(&mut buf) {
            Ok(_) => Some(BatchRequest {
                query: Some(buf.trim().to_string()).filter(|q| !q.is_empty()),
                show: None,
            }),
            Err(e) => {
                warn!(error = %e, "failed to read stdin");
                None
            }
        }
    });

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create async runtime: {e}");
            std::process::exit(1);
        }
    };

    let options = BrowserOptions::from(config.browser);
    let mut renderer = BrowserRenderer::new(io::stdout().lock(), Style::new());

    let loader = match DatasetLoader::with_endpoint(
        config.dataset.endpoint.clone(),
        config.dataset.timeout(),
    ) {
        Ok(loader) => loader,
        Err(e) => {
            // Same outcome as a failed fetch: an empty list.
            let mut browser = CountryBrowser::from_load_result(Err(e), options);
            let result = match request {
                Some(request) => render_batch(&mut browser, &request, &mut renderer),
                None => run_session(&mut browser, io::stdin().lock(), &mut renderer),
            };
            exit_on_error(result);
            return;
        }
    };

    let result = match request {
        Some(request) => runtime.block_on(run_batch(&loader, options, &request, &mut renderer)),
        None => run_repl(&loader, options, runtime.handle(), &mut renderer),
    };
    exit_on_error(result);
}

fn exit_on_error(result: io::Result<()>) {
    if let Err(e) = result {
        // A closed stdout (e.g. piping into `head`) is not an error.
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
