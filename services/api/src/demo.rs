use crate::infra::{parse_period, InMemoryReviewAlertPublisher, InMemoryScorecardRepository};
use chrono::Local;
use clap::Args;
use std::sync::Arc;

use scorecard::error::AppError;
use scorecard::scorecards::domain::{
    BusinessId, FinancialVariances, ProductivityFigures, QualitativeAssessment, ReportingPeriod,
    ScorecardSubmission, SubmissionSource,
};
use scorecard::scorecards::scoring::qualitative::{
    LeadershipChoice, MarketDemandChoice, MarketingChoice, ProductStrengthChoice,
    QualitativeChoice, SalesExecutionChoice, SupplierStrengthChoice,
};
use scorecard::scorecards::scoring::{self, ScoreSummary};
use scorecard::scorecards::{ScorecardRecord, ScorecardService, ScorecardView};

#[derive(Args, Debug, Default)]
pub(crate) struct ScorePreviewArgs {
    /// Revenue variance percentage against target
    #[arg(long)]
    pub(crate) revenue: Option<f64>,
    /// Gross profit variance percentage against target
    #[arg(long)]
    pub(crate) gross_profit: Option<f64>,
    /// Overheads variance percentage against budget (lower is better)
    #[arg(long)]
    pub(crate) overheads: Option<f64>,
    /// Net profit variance percentage against target
    #[arg(long)]
    pub(crate) net_profit: Option<f64>,
    /// Productivity benchmark ratio (gross profit over wages)
    #[arg(long)]
    pub(crate) productivity_benchmark: Option<f64>,
    /// Actual productivity ratio for the month
    #[arg(long)]
    pub(crate) productivity_actual: Option<f64>,
    /// Leadership choice (aligned, minor, misaligned, toxic)
    #[arg(long)]
    pub(crate) leadership: Option<String>,
    /// Market demand choice (strong, flat, softening, decline)
    #[arg(long)]
    pub(crate) market_demand: Option<String>,
    /// Marketing choice (clear, activity, poor, none)
    #[arg(long)]
    pub(crate) marketing: Option<String>,
    /// Product strength choice (differentiated, adequate, weak, broken)
    #[arg(long)]
    pub(crate) product_strength: Option<String>,
    /// Supplier strength choice (strong, acceptable, weak, damaging)
    #[arg(long)]
    pub(crate) supplier_strength: Option<String>,
    /// Sales execution choice (beating, onTarget, underperforming, none)
    #[arg(long)]
    pub(crate) sales_execution: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting period for the latest cards (YYYY-MM). Defaults to the
    /// current month.
    #[arg(long, value_parser = parse_period)]
    pub(crate) period: Option<ReportingPeriod>,
}

pub(crate) fn run_score_preview(args: ScorePreviewArgs) -> Result<(), AppError> {
    let financial = FinancialVariances {
        revenue: args.revenue,
        gross_profit: args.gross_profit,
        overheads: args.overheads,
        net_profit: args.net_profit,
    };
    let productivity = ProductivityFigures {
        benchmark: args.productivity_benchmark,
        actual: args.productivity_actual,
    };
    // Unrecognized choice strings score zero, exactly as the engine treats
    // them everywhere else.
    let qualitative = QualitativeAssessment {
        leadership: choice(args.leadership.as_deref()),
        market_demand: choice(args.market_demand.as_deref()),
        marketing: choice(args.marketing.as_deref()),
        product_strength: choice(args.product_strength.as_deref()),
        supplier_strength: choice(args.supplier_strength.as_deref()),
        sales_execution: choice(args.sales_execution.as_deref()),
    };

    let summary = scoring::score_inputs(&financial, &productivity, &qualitative);
    render_summary(&summary);
    Ok(())
}

fn choice<C: QualitativeChoice>(raw: Option<&str>) -> Option<C> {
    raw.and_then(C::from_key)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let now = Local::now().date_naive();
    let current = args.period.unwrap_or_else(|| {
        use chrono::Datelike;
        ReportingPeriod::new(now.year(), now.month())
    });
    let prior = current.previous();

    println!("Scorecard service demo");
    println!("Periods: {prior} -> {current}");

    let repository = Arc::new(InMemoryScorecardRepository::default());
    let alerts = Arc::new(InMemoryReviewAlertPublisher::default());
    let service = ScorecardService::new(repository, alerts.clone());

    let months = [
        demo_recovering("harbour-bakery", "Harbour Bakery", prior, current),
        demo_steady("iron-and-oak", "Iron & Oak Joinery", prior, current),
        demo_slipping("corner-garage", "Corner Garage", prior, current),
    ];

    for (first, second) in months {
        for submission in [first, second] {
            match service.submit(submission) {
                Ok(record) => render_record(&record),
                Err(err) => println!("  submission rejected: {err}"),
            }
        }
    }

    let portfolio = service.portfolio()?;
    println!("\nPortfolio rollup ({} businesses)", portfolio.businesses);
    if let Some(average) = portfolio.average_score {
        println!("- Average score: {average:.1}");
    }
    println!(
        "- RAG distribution: {} green / {} amber / {} red",
        portfolio.rag_distribution.green,
        portfolio.rag_distribution.amber,
        portfolio.rag_distribution.red
    );
    if portfolio.at_risk.is_empty() {
        println!("- At risk: none");
    } else {
        println!("- At risk (worst first):");
        for entry in &portfolio.at_risk {
            println!(
                "    {} ({}) scored {:.1} in {}",
                entry.business_name, entry.business_id.0, entry.total_score, entry.period
            );
        }
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nReview alerts: none raised");
    } else {
        println!("\nReview alerts raised");
        for alert in &events {
            println!(
                "- [{}] {} for {}",
                alert.template, alert.scorecard_id.0, alert.business_id.0
            );
        }
    }

    Ok(())
}

fn render_record(record: &ScorecardRecord) {
    let view = record.view();
    println!(
        "\n{} ({}) | {} | filed by {}",
        view.business_name, view.business_id.0, view.period, view.source
    );
    render_view(&view);
}

fn render_view(view: &ScorecardView) {
    println!(
        "  Total {:.1} / 100 -> {}",
        view.total_score,
        view.rag_status.to_uppercase()
    );
    match &view.trend {
        Some(trend) => println!(
            "  Trend: {} ({:+.1} vs previous {:.1})",
            trend.direction.label(),
            trend.change,
            trend.previous
        ),
        None => println!("  Trend: first scorecard on record"),
    }
    println!("  Breakdown:");
    for component in &view.components {
        println!(
            "    {:<18} {:>5.1} / {:.1}",
            component.factor.label(),
            component.points,
            component.max_points
        );
    }
    if !view.narrative.is_empty() {
        println!("  Assessment:");
        for line in &view.narrative {
            println!("    {}: {}", line.dimension_label, line.assessment);
        }
    }
}

fn render_summary(summary: &ScoreSummary) {
    println!("Score preview");
    println!(
        "  Total {:.1} / 100 -> {}",
        summary.total_score,
        summary.rag_status.label().to_uppercase()
    );
    println!(
        "  Financial section: {:.1} / {:.1} (supplied metrics only)",
        summary.financial.score, summary.financial.max_score
    );
    println!(
        "  Productivity variance: {:.1}%",
        summary.productivity_variance
    );
    println!("  Breakdown:");
    for component in &summary.components {
        println!(
            "    {:<18} {:>5.1} / {:.1}",
            component.factor.label(),
            component.points,
            component.max_points
        );
    }
}

type DemoPair = (ScorecardSubmission, ScorecardSubmission);

fn base_submission(
    id: &str,
    name: &str,
    period: ReportingPeriod,
    source: SubmissionSource,
) -> ScorecardSubmission {
    ScorecardSubmission {
        business_id: BusinessId(id.to_string()),
        business_name: name.to_string(),
        period,
        source,
        financial: FinancialVariances::default(),
        productivity: ProductivityFigures::default(),
        qualitative: QualitativeAssessment::default(),
        commentary: None,
        submitted_on: Local::now().date_naive(),
    }
}

/// Red in the prior month, green once the turnaround lands.
fn demo_recovering(
    id: &str,
    name: &str,
    prior: ReportingPeriod,
    current: ReportingPeriod,
) -> DemoPair {
    let mut before = base_submission(id, name, prior, SubmissionSource::Consultant);
    before.financial = FinancialVariances {
        revenue: Some(-11.0),
        gross_profit: Some(-7.0),
        overheads: Some(6.0),
        net_profit: Some(-12.0),
    };
    before.productivity = ProductivityFigures {
        benchmark: Some(2.2),
        actual: Some(2.0),
    };
    before.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Minor),
        market_demand: Some(MarketDemandChoice::Softening),
        marketing: Some(MarketingChoice::Poor),
        product_strength: Some(ProductStrengthChoice::Adequate),
        supplier_strength: Some(SupplierStrengthChoice::Weak),
        sales_execution: Some(SalesExecutionChoice::Underperforming),
    };
    before.commentary = Some("New ovens installed; wage bill spiked".to_string());

    let mut after = base_submission(id, name, current, SubmissionSource::Consultant);
    after.financial = FinancialVariances {
        revenue: Some(12.0),
        gross_profit: Some(9.0),
        overheads: Some(-8.0),
        net_profit: Some(10.0),
    };
    after.productivity = ProductivityFigures {
        benchmark: Some(2.2),
        actual: Some(2.6),
    };
    after.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Aligned),
        market_demand: Some(MarketDemandChoice::Strong),
        marketing: Some(MarketingChoice::Clear),
        product_strength: Some(ProductStrengthChoice::Differentiated),
        supplier_strength: Some(SupplierStrengthChoice::Strong),
        sales_execution: Some(SalesExecutionChoice::Beating),
    };

    (before, after)
}

/// Comfortably amber both months, self-reported.
fn demo_steady(
    id: &str,
    name: &str,
    prior: ReportingPeriod,
    current: ReportingPeriod,
) -> DemoPair {
    let mut before = base_submission(id, name, prior, SubmissionSource::BusinessSelfReport);
    before.financial = FinancialVariances {
        revenue: Some(6.0),
        gross_profit: Some(5.0),
        overheads: Some(2.0),
        net_profit: Some(3.0),
    };
    before.productivity = ProductivityFigures {
        benchmark: Some(2.5),
        actual: Some(2.6),
    };
    before.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Aligned),
        market_demand: Some(MarketDemandChoice::Flat),
        marketing: Some(MarketingChoice::Activity),
        product_strength: Some(ProductStrengthChoice::Adequate),
        supplier_strength: Some(SupplierStrengthChoice::Acceptable),
        sales_execution: Some(SalesExecutionChoice::OnTarget),
    };

    let mut after = before.clone();
    after.period = current;
    after.financial.revenue = Some(7.0);
    after.financial.net_profit = Some(4.0);

    (before, after)
}

/// Amber sliding to red; the second card should raise a review alert.
fn demo_slipping(
    id: &str,
    name: &str,
    prior: ReportingPeriod,
    current: ReportingPeriod,
) -> DemoPair {
    let mut before = base_submission(id, name, prior, SubmissionSource::Consultant);
    before.financial = FinancialVariances {
        revenue: Some(2.0),
        gross_profit: Some(0.0),
        overheads: Some(3.0),
        net_profit: Some(-1.0),
    };
    before.productivity = ProductivityFigures {
        benchmark: Some(1.8),
        actual: Some(1.9),
    };
    before.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Minor),
        market_demand: Some(MarketDemandChoice::Flat),
        marketing: Some(MarketingChoice::Activity),
        product_strength: Some(ProductStrengthChoice::Adequate),
        supplier_strength: Some(SupplierStrengthChoice::Acceptable),
        sales_execution: Some(SalesExecutionChoice::OnTarget),
    };

    let mut after = base_submission(id, name, current, SubmissionSource::Consultant);
    after.financial = FinancialVariances {
        revenue: Some(-10.0),
        gross_profit: Some(-8.0),
        overheads: Some(10.0),
        net_profit: Some(-14.0),
    };
    after.productivity = ProductivityFigures {
        benchmark: Some(1.8),
        actual: Some(1.5),
    };
    after.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Misaligned),
        market_demand: Some(MarketDemandChoice::Softening),
        marketing: Some(MarketingChoice::Poor),
        product_strength: Some(ProductStrengthChoice::Weak),
        supplier_strength: Some(SupplierStrengthChoice::Weak),
        sales_execution: Some(SalesExecutionChoice::Underperforming),
    };
    after.commentary = Some("Lost anchor fleet contract in June".to_string());

    (before, after)
}
