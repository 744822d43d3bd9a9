use anyhow::Result;

use crate::cli::args::ProfileCommand;
use crate::cli::context::CliContext;
use crate::domain::{Profile, RegisterRequest};
use crate::screens::ProfileScreen;

/// Run the register command
pub async fn run_register_command(
    ctx: &CliContext,
    username: String,
    email: String,
    password: String,
    phone: Option<String>,
) -> Result<()> {
    let account = RegisterRequest {
        username,
        email,
        password,
        phone,
    };
    ctx.api()?.register(&account).await?;
    println!("회원가입이 완료되었습니다. 로그인해주세요.");
    Ok(())
}

/// Run the login command
pub async fn run_login_command(ctx: &CliContext, username: String, password: String) -> Result<()> {
    ctx.api()?.login(&username, &password).await?;
    println!("{username} 님, 환영합니다.");
    Ok(())
}

/// Run the logout command
pub async fn run_logout_command(ctx: &CliContext) -> Result<()> {
    ctx.api()?.logout().await?;
    println!("로그아웃되었습니다.");
    Ok(())
}

/// Run a profile subcommand
pub async fn run_profile_command(ctx: &CliContext, command: ProfileCommand) -> Result<()> {
    let mut screen = ProfileScreen::new(ctx.api()?);
    screen.load().await;

    match command {
        ProfileCommand::Show => print_profile(screen.form()),
        ProfileCommand::Update {
            username,
            email,
            phone,
        } => {
            let form = screen.form_mut();
            if let Some(username) = username {
                form.username = username;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            screen.save().await?;
            if let Some(message) = screen.message() {
                println!("{message}");
            }
            print_profile(screen.form());
        }
    }
    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("사용자명: {}", profile.username);
    println!("이메일:   {}", profile.email);
    println!("휴대폰:   {}", profile.phone);
}
