// ==========================================
// Call-a-Vet équidos - 命令行入口
// ==========================================
// 子命令: client-roi / operator / scenarios / pricing
// stdout: 摘要或 JSON 报告；stderr: 日志
// ==========================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;

use call_a_vet_economics::api::{
    ApiError, CalculationReport, CalculationRequest, CalculatorApi, PlanView, PricingApi,
};
use call_a_vet_economics::config::{CalculatorConfigReader, ConfigManager};
use call_a_vet_economics::i18n;
use call_a_vet_economics::presentation::SummaryStat;
use call_a_vet_economics::{logging, APP_NAME, VERSION};

use cli::{CalcArgs, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }
    tracing::debug!("{} v{}", APP_NAME, VERSION);

    let config = ConfigManager::load_or_default(cli.config.as_deref())
        .context("无法加载配置文件")?;
    tracing::debug!(source = ?config.source(), "配置就绪");
    let config: Arc<ConfigManager> = Arc::new(config);
    let api = CalculatorApi::new(config.clone());

    match cli.command {
        Commands::ClientRoi { calc, plan } => {
            let plan_price = match plan {
                Some(id) => Some(PricingApi::new().membership_price(&id)?),
                None => None,
            };
            let report = api.client_roi(&build_request(&calc, plan_price))?;
            emit_report(&api, &report, &calc, "calculator.client_roi")
        }
        Commands::Operator { calc } => {
            let report = api.operator_economics(&build_request(&calc, None))?;
            emit_report(&api, &report, &calc, "calculator.operator")
        }
        Commands::Scenarios { locale, json } => {
            let scenarios = api.list_scenarios(locale.as_deref())?;
            if json {
                print_json(&scenarios)
            } else {
                for s in scenarios {
                    println!("{:<12} {:<14} {}", s.calculator.as_str(), s.id, s.title);
                }
                Ok(())
            }
        }
        Commands::Pricing {
            tier,
            plan,
            locale,
            json,
        } => {
            let locale = match locale {
                Some(l) => i18n::canonical_locale(&l).ok_or(ApiError::UnsupportedLocale(l))?,
                None => config.get_locale(),
            };
            let pricing = PricingApi::new();
            let plans = match plan {
                Some(id) => vec![pricing.get_plan(&id, &locale)?],
                None => pricing.list_plans(tier.as_deref(), &locale)?,
            };
            if json {
                print_json(&plans)
            } else {
                print_plans(&plans, &locale);
                Ok(())
            }
        }
    }
}

/// 组装计算请求
///
/// 方案月费排在 `--set` 之前，用户显式赋值最后生效
fn build_request(calc: &CalcArgs, plan_price: Option<f64>) -> CalculationRequest {
    let mut assignments: Vec<String> = plan_price
        .map(|price| format!("membershipCost={}", price))
        .into_iter()
        .collect();
    assignments.extend(calc.set.iter().cloned());

    CalculationRequest {
        scenario: calc.scenario.clone(),
        params_file: calc.params.clone(),
        form: Vec::new(),
        assignments,
        locale: calc.locale.clone(),
    }
}

fn emit_report<P, R>(
    api: &CalculatorApi,
    report: &CalculationReport<P, R>,
    calc: &CalcArgs,
    title_key: &str,
) -> Result<()>
where
    P: Serialize,
    R: Serialize,
{
    i18n::set_locale(&report.locale);

    if calc.json {
        print_json(report)?;
    } else {
        println!("{}", i18n::t_in(title_key, &report.locale));
        print_summary(&report.summary);
    }

    if let Some(dir) = &calc.export {
        let path = api.export(report, dir.as_deref())?;
        let path = path.display().to_string();
        eprintln!("{}", i18n::t_with_args("common.export_written", &[("path", &path)]));
    }
    Ok(())
}

fn print_summary(stats: &[SummaryStat]) {
    let width = stats
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    for stat in stats {
        let marker = if stat.accent { "*" } else { " " };
        let pad = width - stat.label.chars().count();
        println!("{} {}{}  {}", marker, stat.label, " ".repeat(pad), stat.value);
    }
}

fn print_plans(plans: &[PlanView], locale: &str) {
    println!("{}", i18n::t_in("pricing.title", locale));
    let mut current = None;
    for plan in plans {
        if current != Some(plan.tier) {
            println!();
            println!("[{}]", plan.tier_label);
            current = Some(plan.tier);
        }
        let badge = plan.badge.map(|b| format!(" ({})", b)).unwrap_or_default();
        let marker = if plan.highlight { "*" } else { " " };
        println!("{} {:<10} {}{}  {}", marker, plan.id, plan.title, badge, plan.price_label);
        for feature in plan.features {
            println!("      - {}", feature);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_set_overrides_plan_price() {
        let calc = CalcArgs {
            set: vec!["membershipCost=100".to_string()],
            ..CalcArgs::default()
        };
        let request = build_request(&calc, Some(549.0));
        assert_eq!(request.assignments, ["membershipCost=549", "membershipCost=100"]);

        let api = CalculatorApi::new(Arc::new(ConfigManager::new()));
        let report = api.client_roi(&request).unwrap();
        assert_eq!(report.params.membership_cost, 100.0);
    }

    #[test]
    fn test_plan_price_applies_without_set() {
        let request = build_request(&CalcArgs::default(), Some(2499.0));
        let api = CalculatorApi::new(Arc::new(ConfigManager::new()));
        let report = api.client_roi(&request).unwrap();
        assert_eq!(report.params.membership_cost, 2499.0);
    }
}
