#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_wallet_ledger::cli::StrategyType;
    use rust_wallet_ledger::strategy::{create_strategy, BatchConfig};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn run_script(input_path: &Path, strategy_type: StrategyType, config: Option<BatchConfig>) -> String {
        let strategy = create_strategy(strategy_type, config);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(input_path, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to replay script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
    }

    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType, config: Option<BatchConfig>) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let actual_output = run_script(Path::new(&input_path), strategy_type, config);

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("reject_refund")]
    #[case("repeat_and_favorites")]
    #[case("insufficient_balance")]
    #[case("duplicate_phone")]
    #[case("unknown_references")]
    #[case("malformed_data")]
    #[case("multiple_accounts")]
    #[case("boundary_values")]
    #[case("empty_script")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy, None);
    }

    /// Tiny batches force labels to cross batch boundaries
    #[rstest]
    #[case("repeat_and_favorites")]
    #[case("multiple_accounts")]
    fn test_fixtures_with_small_batches(#[case] fixture: &str, #[values(1, 2, 5)] batch_size: usize) {
        run_test_fixture(
            fixture,
            StrategyType::Async,
            Some(BatchConfig::new(batch_size, 2)),
        );
    }

    #[rstest]
    fn test_generated_script_matches_across_strategies(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let mut script = String::from("op,phone,amount,category,ref,target,name\n");
        for i in 0..50 {
            let phone = format!("+99290{:07}", i);
            script.push_str(&format!("register,{},,,,,\n", phone));
            script.push_str(&format!("deposit,{},{},,,,\n", phone, 1000 + i));
            script.push_str(&format!("pay,{},{},auto,p{},,\n", phone, 10 + i, i));
            script.push_str(&format!("favorite,{},,,f{},p{},fav\n", phone, i, i));
            script.push_str(&format!("pay_favorite,{},,,,f{},\n", phone, i));
            if i % 3 == 0 {
                script.push_str(&format!("reject,{},,,,p{},\n", phone, i));
            }
        }
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(script.as_bytes()).unwrap();

        let output = run_script(file.path(), strategy, Some(BatchConfig::new(7, 4)));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], "phone,balance,payments,failed");
        for (i, line) in lines[1..].iter().enumerate() {
            let i = i as i64;
            let spent = if i % 3 == 0 { 10 + i } else { 2 * (10 + i) };
            let failed = if i % 3 == 0 { 1 } else { 0 };
            assert_eq!(
                *line,
                format!("+99290{:07},{},2,{}", i, 1000 + i - spent, failed)
            );
        }
    }

    #[rstest]
    fn test_missing_input_is_fatal(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        let mut output = Vec::new();

        let result = create_strategy(strategy, None).process(Path::new("tests/fixtures/none.csv"), &mut output);

        assert!(result.unwrap_err().contains("Failed to open file"));
    }
}
