//! Cross-crate checks of extraction and script generation

mod common;

use common::assertions::assert_contains;
use common::fixtures::FHE_COUNTER_SOL;
use fhevm_codegen::{assemble_script, generate_quick_interact, functions_summary};
use fhevm_scan::{contract_name, exported_function_names, extract_functions};

const MIXED: &str = r#"
contract Mixed is Base {
    constructor(address owner) {}

    function deposit(uint256 amount) external payable {}
    function _authorize(address who) internal view returns (bool) {}
    function balanceOf(address account) public view returns (uint256) {}
    function secret() private {}
    function reset() external {}
    // function commented(uint8 x) external {}
    function transfer(address to, uint32 amount) public returns (bool) {}
}
"#;

#[test]
fn extractor_returns_public_functions_in_order() {
    let functions = extract_functions(MIXED);
    let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["deposit", "balanceOf", "reset", "transfer"]);

    let transfer = &functions[3];
    assert_eq!(transfer.parameter_names, ["to", "amount"]);
    assert!(!transfer.is_view_or_pure);

    let reset = &functions[2];
    assert!(reset.parameter_names.is_empty());

    assert!(functions[0].is_payable);
    assert!(functions[1].is_view_or_pure);
}

#[test]
fn documentation_names_use_visibility_rule() {
    assert_eq!(
        exported_function_names(MIXED),
        ["deposit", "balanceOf", "reset", "transfer"]
    );
}

#[test]
fn script_assembly_is_deterministic() {
    let name = contract_name(FHE_COUNTER_SOL).unwrap();
    let functions = extract_functions(FHE_COUNTER_SOL);

    let first = assemble_script(&name, &functions);
    let second = assemble_script(&name, &functions);
    assert_eq!(first, second);
    assert_eq!(generate_quick_interact(FHE_COUNTER_SOL).unwrap(), first);
}

#[test]
fn script_numbers_steps_in_declaration_order() {
    let script = generate_quick_interact(FHE_COUNTER_SOL).unwrap();
    let get = script.find("// 1. getCount()").unwrap();
    let inc = script.find("// 2. increment()").unwrap();
    let dec = script.find("// 3. decrement()").unwrap();
    assert!(get < inc && inc < dec);
    assert_contains(&script, "FHECounter");
}

#[test]
fn summary_counts_functions() {
    let functions = extract_functions(MIXED);
    let summary = functions_summary("Mixed", &functions);
    assert_contains(&summary, "Mixed");
    assert_contains(&summary, "deposit");
    assert!(!summary.contains("secret"));
    assert!(!summary.contains("_authorize"));
}
