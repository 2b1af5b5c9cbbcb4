//! Property tests for fail-fast sequencing.

use std::sync::Mutex;

use proptest::prelude::*;

use deploy_runner::{
    CommandExecutor, DeployOptions, DeployUseCase, ExitStatus, SpawnError, Step, StepPlan,
};

/// Executor whose step `i` exits with `codes[i]`; records what ran.
struct CodeExecutor {
    codes: Vec<i32>,
    ran: Mutex<Vec<usize>>,
}

impl CommandExecutor for CodeExecutor {
    fn execute(&self, step: &Step) -> Result<ExitStatus, SpawnError> {
        let index: usize = step.name().trim_start_matches("step-").parse().unwrap();
        self.ran.lock().unwrap().push(index);
        Ok(ExitStatus::from_code(self.codes[index]))
    }
}

fn plan_of(len: usize) -> StepPlan {
    StepPlan::new(
        (0..len)
            .map(|i| Step::new(format!("step-{}", i), "true"))
            .collect(),
    )
    .unwrap()
}

fn exit_code() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => Just(0),
        1 => 1..=255i32,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the run exits with the first non-zero code, or 0 when there is none.
    #[test]
    fn property_exit_code_is_first_failure(codes in proptest::collection::vec(exit_code(), 1..8)) {
        let executor = CodeExecutor { codes: codes.clone(), ran: Mutex::new(Vec::new()) };

        let report = DeployUseCase::new(&executor).execute(&plan_of(codes.len()), &DeployOptions::new());

        let expected = codes.iter().copied().find(|c| *c != 0).unwrap_or(0);
        prop_assert_eq!(report.exit_code(), expected);
    }

    /// PROPERTY: steps run as a prefix of the plan, ending at the first failure.
    #[test]
    fn property_runs_prefix_through_first_failure(codes in proptest::collection::vec(exit_code(), 1..8)) {
        let executor = CodeExecutor { codes: codes.clone(), ran: Mutex::new(Vec::new()) };

        let report = DeployUseCase::new(&executor).execute(&plan_of(codes.len()), &DeployOptions::new());

        let stop = codes.iter().position(|c| *c != 0).map_or(codes.len(), |i| i + 1);
        let ran = executor.ran.lock().unwrap().clone();
        prop_assert_eq!(ran, (0..stop).collect::<Vec<_>>());
        prop_assert_eq!(report.outcomes.len() + report.skipped.len(), codes.len());
    }

    /// PROPERTY: a dry run never executes and always exits 0.
    #[test]
    fn property_dry_run_never_executes(codes in proptest::collection::vec(exit_code(), 1..8)) {
        let executor = CodeExecutor { codes: codes.clone(), ran: Mutex::new(Vec::new()) };

        let report = DeployUseCase::new(&executor)
            .execute(&plan_of(codes.len()), &DeployOptions::new().with_dry_run(true));

        prop_assert!(executor.ran.lock().unwrap().is_empty());
        prop_assert_eq!(report.exit_code(), 0);
    }
}
