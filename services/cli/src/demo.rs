use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use crate::infra::{
    parse_action, parse_resource_kind, parse_role, InMemoryDirectory, InMemoryEvaluationStore,
    InMemoryScoreboard, RosterEntry,
};
use crewbase::access::{AccessPolicy, Action, ResourceKind, ResourceRef};
use crewbase::error::AppError;
use crewbase::evaluations::{
    parse_history, CompanyScoreReport, EvaluationDraft, EvaluationService, LanguageLevel,
    PersonScoreSnapshot, QuestionnaireKind,
};
use crewbase::people::{CompanyId, Level, Occupation, OfficeId, Role, Subject, UserDirectory, UserId};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the access-policy portion of the demo
    #[arg(long)]
    pub(crate) skip_access: bool,
    /// Skip the evaluation scoring portion of the demo
    #[arg(long)]
    pub(crate) skip_scoring: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV export of historical evaluations
    #[arg(long)]
    pub(crate) history: PathBuf,
    /// Company to report on (defaults to APP_COMPANY_ID)
    #[arg(long)]
    pub(crate) company: Option<u64>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AccessCheckArgs {
    /// Acting subject's user id
    #[arg(long)]
    pub(crate) subject: u64,
    /// Subject role
    #[arg(long, value_parser = parse_role, default_value = "normal")]
    pub(crate) role: Role,
    /// Subject's company id (defaults to APP_COMPANY_ID, ignored for super admins)
    #[arg(long)]
    pub(crate) company: Option<u64>,
    /// Subject is an administrative account
    #[arg(long)]
    pub(crate) admin_account: bool,
    /// Subject currently heads at least one office
    #[arg(long)]
    pub(crate) office_head: bool,
    /// Requested action
    #[arg(long, value_parser = parse_action)]
    pub(crate) action: Action,
    /// Resource kind
    #[arg(long, value_parser = parse_resource_kind)]
    pub(crate) resource: ResourceKind,
    /// Resource's company id (defaults to the subject's company)
    #[arg(long)]
    pub(crate) resource_company: Option<u64>,
    /// Resource owner's user id, when relevant
    #[arg(long)]
    pub(crate) owner: Option<u64>,
}

pub(crate) fn run_demo(args: DemoArgs, company: CompanyId) -> Result<(), AppError> {
    println!("crewbase demo (company {})", company.0);

    let directory = Arc::new(InMemoryDirectory::default());
    seed_roster(&directory, company);

    println!("\nRoster");
    for entry in directory.entries() {
        println!("- #{} {}", entry.id.0, entry.describe());
    }

    if !args.skip_access {
        run_access_section(&directory, company);
    }

    if !args.skip_scoring {
        run_scoring_section(&directory, company)?;
    }

    Ok(())
}

fn seed_roster(directory: &InMemoryDirectory, company: CompanyId) {
    directory.insert(RosterEntry {
        id: UserId(1),
        name: "Val Sandoval",
        company_id: company,
        office_id: None,
        role: Role::SuperAdmin,
        occupation: Occupation::Administrative,
        level: None,
        admin_account: true,
        heads_office: false,
    });
    directory.insert(RosterEntry {
        id: UserId(2),
        name: "Noa Lindqvist",
        company_id: company,
        office_id: None,
        role: Role::Admin,
        occupation: Occupation::Administrative,
        level: None,
        admin_account: true,
        heads_office: false,
    });
    directory.insert(RosterEntry {
        id: UserId(3),
        name: "Dana Gomes",
        company_id: company,
        office_id: Some(OfficeId(1)),
        role: Role::Evaluator,
        occupation: Occupation::Engineer,
        level: Some(Level::Senior),
        admin_account: false,
        heads_office: true,
    });
    directory.insert(RosterEntry {
        id: UserId(4),
        name: "Rui Tanaka",
        company_id: company,
        office_id: Some(OfficeId(1)),
        role: Role::Normal,
        occupation: Occupation::Engineer,
        level: Some(Level::Mid),
        admin_account: false,
        heads_office: false,
    });
    directory.insert(RosterEntry {
        id: UserId(5),
        name: "Bea Okonkwo",
        company_id: company,
        office_id: None,
        role: Role::Normal,
        occupation: Occupation::Engineer,
        level: Some(Level::JuniorPlus),
        admin_account: false,
        heads_office: false,
    });
}

fn run_access_section(directory: &InMemoryDirectory, company: CompanyId) {
    let policy = AccessPolicy::standard();
    let entries = directory.entries();

    let subject_of = |id: u64| -> Subject {
        directory
            .subject(UserId(id))
            .expect("seeded roster entry")
    };
    let name_of = |id: u64| -> &str {
        entries
            .iter()
            .find(|entry| entry.id == UserId(id))
            .expect("seeded roster entry")
            .name
    };

    let other_company = CompanyId(company.0 + 1);
    let checks: Vec<(u64, Action, ResourceRef, &str)> = vec![
        (
            1,
            Action::Destroy,
            ResourceRef::new(ResourceKind::Project, other_company),
            "destroy a project anywhere",
        ),
        (
            2,
            Action::Update,
            ResourceRef::new(ResourceKind::Office, company),
            "update an office at home",
        ),
        (
            2,
            Action::Destroy,
            ResourceRef::new(ResourceKind::Employee, company),
            "destroy an employee record",
        ),
        (
            2,
            Action::Create,
            ResourceRef::new(ResourceKind::Employee, other_company),
            "create an employee elsewhere",
        ),
        (
            3,
            Action::Create,
            ResourceRef::new(ResourceKind::Evaluation, company),
            "create an evaluation",
        ),
        (
            3,
            Action::Destroy,
            ResourceRef::new(ResourceKind::Evaluation, company),
            "destroy an evaluation",
        ),
        (
            4,
            Action::Edit,
            ResourceRef::new(ResourceKind::Employee, company).owned_by(UserId(4)),
            "edit their own record",
        ),
        (
            4,
            Action::Edit,
            ResourceRef::new(ResourceKind::Employee, company).owned_by(UserId(3)),
            "edit a colleague's record",
        ),
        (
            4,
            Action::Manage,
            ResourceRef::new(ResourceKind::Punch, company).owned_by(UserId(4)),
            "manage their own punches",
        ),
        (
            4,
            Action::Read,
            ResourceRef::new(ResourceKind::Punch, company).owned_by(UserId(3)),
            "read a colleague's punches",
        ),
    ];

    println!("\nAccess policy");
    for (subject_id, action, resource, description) in checks {
        let decision = policy.authorize(&subject_of(subject_id), action, &resource);
        println!(
            "- {} may {}: {}",
            name_of(subject_id),
            description,
            decision.label()
        );
    }
}

fn run_scoring_section(
    directory: &Arc<InMemoryDirectory>,
    company: CompanyId,
) -> Result<(), AppError> {
    let store = Arc::new(InMemoryEvaluationStore::default());
    let scoreboard = Arc::new(InMemoryScoreboard::default());
    let service = EvaluationService::new(store, directory.clone(), scoreboard.clone());

    let evaluator = UserId(3);
    let drafts = vec![
        performance(UserId(4), evaluator, company, 6),
        performance(UserId(4), evaluator, company, 8),
        performance(UserId(4), evaluator, company, 10),
        language(UserId(4), evaluator, company, 5, LanguageLevel::Beginner),
        language(UserId(4), evaluator, company, 9, LanguageLevel::Advanced),
        performance(UserId(5), evaluator, company, 7),
    ];

    println!("\nEvaluation intake");
    for draft in drafts {
        let record = service.create(draft)?;
        println!(
            "- stored {} for #{} ({}, score {})",
            record.id.0,
            record.evaluated_id.0,
            record.questionnaire.label(),
            record.score
        );
    }

    let refreshed = scoreboard.refreshed();
    println!(
        "- office scoreboard refreshed {} time(s) for office {}",
        refreshed.len(),
        refreshed.first().map(|office| office.0).unwrap_or_default()
    );

    println!("\nDerived scores");
    for person in [UserId(4), UserId(5)] {
        let snapshot = service.snapshot(person)?;
        println!("- #{}: {}", person.0, render_snapshot(&snapshot));
    }

    let average = service.company_average(company)?;
    println!("- company overall average: {average:.2}");

    info!(company = company.0, "demo scoring section complete");
    Ok(())
}

fn performance(
    evaluated: UserId,
    evaluator: UserId,
    company: CompanyId,
    score: u8,
) -> EvaluationDraft {
    EvaluationDraft {
        evaluated_id: evaluated,
        evaluator_id: evaluator,
        questionnaire: QuestionnaireKind::Performance,
        score,
        language_level: None,
        company_id: company,
    }
}

fn language(
    evaluated: UserId,
    evaluator: UserId,
    company: CompanyId,
    score: u8,
    level: LanguageLevel,
) -> EvaluationDraft {
    EvaluationDraft {
        evaluated_id: evaluated,
        evaluator_id: evaluator,
        questionnaire: QuestionnaireKind::Language,
        score,
        language_level: Some(level),
        company_id: company,
    }
}

pub(crate) fn run_score_report(args: ReportArgs, default_company: CompanyId) -> Result<(), AppError> {
    let company = args.company.map(CompanyId).unwrap_or(default_company);

    let file = File::open(&args.history)?;
    let records = parse_history(file)?;
    let report = CompanyScoreReport::from_records(company, &records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Score report for company {}", report.company.0);
    if report.people.is_empty() {
        println!("- no evaluations on file");
    }
    for row in &report.people {
        println!(
            "- #{} ({} evaluation(s)): {}",
            row.person.0,
            row.evaluations,
            render_snapshot(&row.snapshot)
        );
    }
    println!("- company overall average: {:.2}", report.overall_average);

    Ok(())
}

pub(crate) fn run_access_check(
    args: AccessCheckArgs,
    default_company: CompanyId,
) -> Result<(), AppError> {
    let subject_company = match args.role {
        Role::SuperAdmin => None,
        _ => Some(args.company.map(CompanyId).unwrap_or(default_company)),
    };

    let subject = Subject {
        id: UserId(args.subject),
        company_id: subject_company,
        role: args.role,
        admin_account: args.admin_account || args.role.has_admin_access(),
        office_head: args.office_head,
    };

    let resource_company = args
        .resource_company
        .map(CompanyId)
        .or(subject_company)
        .unwrap_or(default_company);
    let mut resource = ResourceRef::new(args.resource, resource_company);
    if let Some(owner) = args.owner {
        resource = resource.owned_by(UserId(owner));
    }

    let decision = AccessPolicy::standard().authorize(&subject, args.action, &resource);
    println!(
        "{} {} on {} in company {}: {}",
        args.role.label(),
        args.action.label(),
        args.resource.label(),
        resource_company.0,
        decision.label()
    );

    Ok(())
}

fn render_snapshot(snapshot: &PersonScoreSnapshot) -> String {
    let language = match (snapshot.language_score, snapshot.language_level) {
        (Some(score), Some(level)) => format!("language {} ({})", score, level.label()),
        _ => "language n/a".to_string(),
    };
    let performance = match snapshot.performance_score {
        Some(score) => format!("performance {score:.2}"),
        None => "performance n/a".to_string(),
    };
    let overall = match snapshot.overall_score {
        Some(score) => format!("overall {score:.2}"),
        None => "overall n/a".to_string(),
    };

    format!("{performance} | {language} | {overall}")
}
