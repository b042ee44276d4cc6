//! React interaction component generated from a compiled ABI
//!
//! Unlike the quick-interact script, this works from the compiler's artifact
//! JSON, so parameter types are known and inputs can be rendered per
//! parameter.

use std::fmt::Write;

use serde::Deserialize;

use crate::CodegenError;

/// Read-only functions shown in the state column
const MAX_READ_CARDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default = "default_mutability")]
    pub state_mutability: String,
}

impl AbiFunction {
    pub fn is_read_only(&self) -> bool {
        self.state_mutability == "view" || self.state_mutability == "pure"
    }

    fn abi_line(&self) -> String {
        let inputs = self
            .inputs
            .iter()
            .map(|i| format!("{} {}", i.ty, i.name).trim_end().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let outputs = self
            .outputs
            .iter()
            .map(|o| o.ty.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let view = if self.is_read_only() { " view" } else { "" };
        format!("'function {}({}){} returns ({})'", self.name, inputs, view, outputs)
    }
}

fn default_mutability() -> String {
    "nonpayable".to_string()
}

#[derive(Deserialize)]
struct Artifact {
    #[serde(default)]
    abi: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct AbiItem {
    #[serde(rename = "type")]
    kind: String,
}

/// Function entries from a compiled contract artifact
pub fn parse_artifact(json: &str) -> Result<Vec<AbiFunction>, CodegenError> {
    let artifact: Artifact = serde_json::from_str(json)?;
    let mut functions = Vec::new();
    for item in artifact.abi {
        let kind: AbiItem = serde_json::from_value(item.clone())?;
        if kind.kind == "function" {
            functions.push(serde_json::from_value(item)?);
        }
    }
    Ok(functions)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// State variable holding one input of one function, e.g. `transferAmount`
fn input_var(func: &AbiFunction, param: &AbiParam) -> String {
    format!("{}{}", func.name, capitalize(&param.name))
}

fn handler(func: &AbiFunction) -> String {
    let cap = capitalize(&func.name);
    let mut out = String::new();

    let _ = writeln!(out, "  // {} Function", func.name);
    let _ = writeln!(
        out,
        "  const [{name}Loading, set{cap}Loading] = useState(false);",
        name = func.name,
        cap = cap
    );
    for param in &func.inputs {
        let var = input_var(func, param);
        let _ = writeln!(
            out,
            "  const [{var}, set{setter}] = useState('');",
            var = var,
            setter = capitalize(&var)
        );
    }

    let args = func
        .inputs
        .iter()
        .map(|p| input_var(func, p))
        .collect::<Vec<_>>()
        .join(", ");
    let encrypted = func
        .inputs
        .iter()
        .find(|p| p.ty.contains("uint") && !p.ty.contains("[]"));

    let _ = writeln!(out);
    let _ = writeln!(out, "  const handle{} = async () => {{", cap);
    let _ = writeln!(out, "    set{}Loading(true);", cap);
    let _ = writeln!(out, "    try {{");
    let _ = writeln!(out, "      let args: any[] = [{}];", args);

    if let Some(param) = encrypted {
        let encrypted_args = func
            .inputs
            .iter()
            .map(|p| {
                if p.name == param.name {
                    "encrypted".to_string()
                } else {
                    input_var(func, p)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "      // Encrypt input using FHEVM");
        let _ = writeln!(out, "      const fhevm = await initFhevm();");
        let _ = writeln!(
            out,
            "      const encrypted = await fhevm.encrypt32(parseInt({}));",
            input_var(func, param)
        );
        let _ = writeln!(out, "      args = [{}];", encrypted_args);
    }

    let _ = writeln!(out, "      console.log('Calling {}...');", func.name);
    if func.is_read_only() {
        let _ = writeln!(
            out,
            "      alert('{} call initiated. Check console for result.');",
            cap
        );
    } else {
        let _ = writeln!(out, "      write({{");
        let _ = writeln!(out, "        address: CONTRACT_ADDRESS as `0x${{string}}`,");
        let _ = writeln!(out, "        abi: contractABI,");
        let _ = writeln!(out, "        functionName: '{}',", func.name);
        if !func.inputs.is_empty() {
            let _ = writeln!(out, "        args: args,");
        }
        let _ = writeln!(out, "      }});");
        let _ = writeln!(out, "      alert('{} transaction sent!');", cap);
    }
    let _ = writeln!(out, "    }} catch (error) {{");
    let _ = writeln!(out, "      console.error('Error:', error);");
    let _ = writeln!(out, "      alert('Error calling {}');", func.name);
    let _ = writeln!(out, "    }} finally {{");
    let _ = writeln!(out, "      set{}Loading(false);", cap);
    let _ = writeln!(out, "    }}");
    let _ = write!(out, "  }};");
    out
}

fn write_card(func: &AbiFunction) -> String {
    let cap = capitalize(&func.name);
    let mut out = String::new();
    let _ = writeln!(out, "        <div className=\"glass rounded-xl p-6\">");
    let _ = writeln!(
        out,
        "          <h3 className=\"text-xl font-semibold text-white mb-4\">{}</h3>",
        cap
    );
    for param in &func.inputs {
        let var = input_var(func, param);
        let input_type = if param.ty.contains("address") { "text" } else { "number" };
        let placeholder = if param.ty.contains("uint") {
            "🔐 Will be encrypted".to_string()
        } else {
            format!("Enter {}...", param.name)
        };
        let _ = writeln!(out, "          <div className=\"mb-4\">");
        let _ = writeln!(
            out,
            "            <label className=\"block text-purple-200 mb-2\">{}</label>",
            capitalize(&param.name)
        );
        let _ = writeln!(out, "            <input");
        let _ = writeln!(out, "              type=\"{}\"", input_type);
        let _ = writeln!(out, "              value={{{}}}", var);
        let _ = writeln!(
            out,
            "              onChange={{(e) => set{}(e.target.value)}}",
            capitalize(&var)
        );
        let _ = writeln!(out, "              placeholder=\"{}\"", placeholder);
        let _ = writeln!(
            out,
            "              className=\"w-full px-4 py-3 rounded-lg bg-white/5 border border-purple-400/30 text-white focus:outline-none focus:border-purple-400\""
        );
        let _ = writeln!(out, "            />");
        let _ = writeln!(out, "          </div>");
    }
    let _ = writeln!(out, "          <button");
    let _ = writeln!(out, "            onClick={{handle{}}}", cap);
    let _ = writeln!(out, "            disabled={{{}Loading || isWritePending}}", func.name);
    let _ = writeln!(out, "            className=\"btn-primary w-full\"");
    let _ = writeln!(out, "          >");
    let _ = writeln!(
        out,
        "            {{{}Loading || isWritePending ? 'Processing...' : '{}'}}",
        func.name, cap
    );
    let _ = writeln!(out, "          </button>");
    let _ = write!(out, "        </div>");
    out
}

fn read_card(func: &AbiFunction) -> String {
    let cap = capitalize(&func.name);
    format!(
        r#"        <div className="glass rounded-xl p-6">
          <h3 className="text-lg font-semibold text-white mb-2">{cap}</h3>
          <div className="text-xl font-mono text-purple-300 break-all">
            🔒 Encrypted Value
          </div>
          <button
            onClick={{handle{cap}}}
            disabled={{{name}Loading}}
            className="mt-4 text-sm text-purple-400 hover:text-purple-300 underline"
          >
            {{{name}Loading ? 'Loading...' : 'Check {cap}'}}
          </button>
        </div>"#,
        cap = cap,
        name = func.name,
    )
}

/// Generate `<Contract>Interaction`, a client component driving every
/// function in `functions`
pub fn contract_component(contract_name: &str, functions: &[AbiFunction]) -> String {
    let abi_lines = functions
        .iter()
        .map(|f| format!("  {}", f.abi_line()))
        .collect::<Vec<_>>()
        .join(",\n");
    let handlers = functions
        .iter()
        .map(handler)
        .collect::<Vec<_>>()
        .join("\n\n");
    let write_cards = functions
        .iter()
        .filter(|f| !f.is_read_only())
        .map(write_card)
        .collect::<Vec<_>>()
        .join("\n\n");
    let read_cards = functions
        .iter()
        .filter(|f| f.is_read_only())
        .take(MAX_READ_CARDS)
        .map(read_card)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"'use client';

import {{ useState }} from 'react';
import {{ useWriteContract, useAccount }} from 'wagmi';
import {{ parseAbi }} from 'viem';
import {{ initFhevm }} from '../../lib/fhevm';

const CONTRACT_ADDRESS = process.env.NEXT_PUBLIC_CONTRACT_ADDRESS || '0x...';

const contractABI = parseAbi([
{abi_lines}
]);

export default function {name}Interaction() {{
  const {{ address }} = useAccount();
  const {{ writeContract: write, isPending: isWritePending }} = useWriteContract();

{handlers}

  return (
    <div className="grid grid-cols-1 lg:grid-cols-2 gap-8">
      {{/* Write Functions */}}
      <div className="space-y-6">
        <h2 className="text-2xl font-bold text-white mb-4">Contract Functions</h2>

{write_cards}
      </div>

      {{/* Read Functions */}}
      <div className="space-y-6">
        <h2 className="text-2xl font-bold text-white mb-4">Contract State</h2>

{read_cards}
      </div>
    </div>
  );
}}
"#,
        name = contract_name,
        abi_lines = abi_lines,
        handlers = handlers,
        write_cards = write_cards,
        read_cards = read_cards,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{
        "contractName": "FHECounter",
        "abi": [
            {"type": "constructor", "inputs": []},
            {"type": "event", "name": "Bumped", "inputs": []},
            {
                "type": "function",
                "name": "getCount",
                "inputs": [],
                "outputs": [{"name": "", "type": "bytes32"}],
                "stateMutability": "view"
            },
            {
                "type": "function",
                "name": "increment",
                "inputs": [
                    {"name": "amount", "type": "uint32"},
                    {"name": "inputProof", "type": "bytes"}
                ],
                "outputs": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_artifact_keeps_functions_only() {
        let functions = parse_artifact(ARTIFACT).unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name, "getCount");
        assert!(functions[0].is_read_only());
        assert_eq!(functions[1].state_mutability, "nonpayable");
        assert_eq!(functions[1].inputs[1].ty, "bytes");
    }

    #[test]
    fn test_parse_artifact_rejects_garbage() {
        assert!(matches!(
            parse_artifact("[1, 2"),
            Err(CodegenError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_missing_abi_is_empty() {
        assert!(parse_artifact("{}").unwrap().is_empty());
    }

    #[test]
    fn test_component_structure() {
        let functions = parse_artifact(ARTIFACT).unwrap();
        let tsx = contract_component("FHECounter", &functions);

        assert!(tsx.contains("export default function FHECounterInteraction() {"));
        assert!(tsx.contains("  'function getCount() view returns (bytes32)',\n  'function increment(uint32 amount, bytes inputProof) returns ()'"));
        assert!(tsx.contains("const [incrementAmount, setIncrementAmount] = useState('');"));
        assert!(tsx.contains("const encrypted = await fhevm.encrypt32(parseInt(incrementAmount));"));
        assert!(tsx.contains("args = [encrypted, incrementInputProof];"));
        assert!(tsx.contains("functionName: 'increment',"));
        assert!(tsx.contains("alert('GetCount call initiated. Check console for result.');"));

        let write_col = tsx.find("Contract Functions").unwrap();
        let read_col = tsx.find("Contract State").unwrap();
        let increment_card = tsx.find(">Increment</h3>").unwrap();
        let count_card = tsx.find(">GetCount</h3>").unwrap();
        assert!(write_col < increment_card && increment_card < read_col && read_col < count_card);
    }

    #[test]
    fn test_read_column_capped() {
        let functions: Vec<AbiFunction> = (0..7)
            .map(|i| AbiFunction {
                name: format!("view{}", i),
                inputs: vec![],
                outputs: vec![],
                state_mutability: "view".into(),
            })
            .collect();
        let tsx = contract_component("Many", &functions);
        assert!(tsx.contains("'Check View4'"));
        assert!(!tsx.contains("'Check View5'"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("transfer"), "Transfer");
        assert_eq!(capitalize(""), "");
    }
}
