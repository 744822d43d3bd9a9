use anyhow::{bail, Result};
use std::time::Duration;

use crate::cli::args::Answer;
use crate::cli::context::CliContext;
use crate::core::onboarding::OnboardingInput;
use crate::domain::ServiceType;
use crate::navigation::Navigation;
use crate::screens::launch::LaunchScreen;
use crate::screens::OnboardingScreen;
use crate::timer::SPLASH_DELAY;

/// Run the launch command
pub async fn run_launch_command(ctx: &CliContext, no_splash: bool) -> Result<()> {
    let delay = if no_splash { Duration::ZERO } else { SPLASH_DELAY };
    let mut screen = LaunchScreen::start(ctx.store(), delay);

    match screen.finish().await? {
        Some(Navigation::Replace(route)) | Some(Navigation::Push(route)) => println!("{route}"),
        Some(other) => println!("{other:?}"),
        None => println!("Launch cancelled"),
    }
    Ok(())
}

/// Run the onboard command
pub async fn run_onboard_command(
    ctx: &CliContext,
    has_grade: Answer,
    service_type: Option<ServiceType>,
    explain: bool,
) -> Result<()> {
    let inputs = onboarding_inputs(has_grade, service_type, explain)?;
    let mut screen = OnboardingScreen::new(ctx.store());

    for input in inputs {
        println!("{} → {}", screen.step().prompt(), input.label());
        if let Some(navigation) = screen.press(input).await? {
            if let Navigation::Replace(route) | Navigation::Push(route) = navigation {
                println!("온보딩 완료, {route} 으로 이동합니다.");
            }
            return Ok(());
        }
    }

    bail!("Onboarding did not finish")
}

/// Button presses that answer the wizard the way the flags describe
fn onboarding_inputs(
    has_grade: Answer,
    service_type: Option<ServiceType>,
    explain: bool,
) -> Result<Vec<OnboardingInput>> {
    match has_grade {
        Answer::No => Ok(vec![OnboardingInput::No, OnboardingInput::StartExploring]),
        Answer::Yes => {
            let Some(kind) = service_type else {
                bail!(crate::error::Error::Validation(
                    "--service is required with --has-grade yes".to_string()
                ));
            };
            let mut inputs = vec![OnboardingInput::Yes];
            if explain {
                inputs.extend([OnboardingInput::Unsure, OnboardingInput::Understood]);
            }
            inputs.push(OnboardingInput::Choose(kind));
            Ok(inputs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_without_grade() {
        let inputs = onboarding_inputs(Answer::No, Some(ServiceType::HomeBased), false).unwrap();
        assert_eq!(inputs, vec![OnboardingInput::No, OnboardingInput::StartExploring]);
    }

    #[test]
    fn test_inputs_with_explanation() {
        let inputs = onboarding_inputs(Answer::Yes, Some(ServiceType::HomeBased), true).unwrap();
        assert_eq!(
            inputs,
            vec![
                OnboardingInput::Yes,
                OnboardingInput::Unsure,
                OnboardingInput::Understood,
                OnboardingInput::Choose(ServiceType::HomeBased),
            ]
        );
    }

    #[test]
    fn test_grade_without_service_is_rejected() {
        let err = onboarding_inputs(Answer::Yes, None, false).unwrap_err();
        let err = err.downcast_ref::<crate::error::Error>().unwrap();
        assert!(err.is_validation());
    }
}
