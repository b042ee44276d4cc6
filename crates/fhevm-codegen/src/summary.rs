//! Markdown overview of a contract's callable functions

use fhevm_scan::FunctionDescriptor;

pub fn functions_summary(contract_name: &str, functions: &[FunctionDescriptor]) -> String {
    if functions.is_empty() {
        return format!(
            "# {} - Contract Functions\n\nNo public functions found.\n",
            contract_name
        );
    }

    let functions_doc = functions
        .iter()
        .map(|func| {
            let kind = if func.is_view_or_pure {
                "(View/Pure)"
            } else {
                "(State-Changing)"
            };
            let mut entry = format!("### {}() {}", func.name, kind);
            if !func.parameter_names.is_empty() {
                entry.push_str(&format!(
                    "\n  - Parameters: {}",
                    func.parameter_names.join(", ")
                ));
            }
            if func.is_payable {
                entry.push_str("\n  - 💰 Payable: true");
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"# {name} - Contract Functions

## Overview

Total public functions: {count}

## Functions

{functions_doc}

## Quick Interact

Run the auto-generated quick-interact script:

```bash
npx hardhat run scripts/quick-interact.ts --network localhost
```

Or with Sepolia:

```bash
npx hardhat run scripts/quick-interact.ts --network sepolia
```
"#,
        name = contract_name,
        count = functions.len(),
        functions_doc = functions_doc,
    )
}
