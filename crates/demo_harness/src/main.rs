use demo_harness::{
    cli::CmdLineConf,
    configs::Settings,
    core,
    errors::ApplicationResult,
    logger,
};
use error_stack::ResultExt;
use payment_fingerprint::CompatibilityContext;

fn main() -> ApplicationResult<()> {
    // get commandline config before initializing config
    let cmd_line = <CmdLineConf as clap::Parser>::parse();

    let conf = Settings::with_config_path(cmd_line.config_path.clone())
        .attach_printable("Unable to construct application configuration")?;

    let _guard = router_env::setup(
        &conf.log,
        router_env::service_name!(),
        [router_env::service_name!(), "payment_fingerprint"],
    );

    logger::debug!(merchant = ?conf.merchant, "configuration loaded");

    let context = CompatibilityContext::init(conf.compatibility);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    core::run(&cmd_line.subcommand, &conf, &context, &mut out)
}
