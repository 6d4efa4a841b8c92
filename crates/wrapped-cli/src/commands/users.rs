use wrapped_core::UserKey;
use wrapped_db::UserSpotlight;

use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{UserArgs, UsersArgs};
use crate::output::{output, output_titled};

pub fn handle_list(args: &UsersArgs, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    let users = reports.users(args.most_active)?;
    output(&users, flags.format)
}

pub fn handle_spotlight(
    args: &UserArgs,
    reports: &AppReports,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = UserKey::new(args.name.clone(), args.dob);
    let spotlight = UserSpotlight::from(args.view);
    let result = reports.run(&spotlight.request(user.clone()))?;
    output_titled(
        &format!("Spotlight | {user} | {}", spotlight.title()),
        &result,
        None,
        flags.format,
    )
}
