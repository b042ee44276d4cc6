//! hardhat-deploy registration script

pub fn deploy_script(contract_name: &str) -> String {
    format!(
        r#"import {{ DeployFunction }} from "hardhat-deploy/types";
import {{ HardhatRuntimeEnvironment }} from "hardhat/types";

const func: DeployFunction = async function (hre: HardhatRuntimeEnvironment) {{
  const {{ deployer }} = await hre.getNamedAccounts();
  const {{ deploy }} = hre.deployments;

  const deployed{name} = await deploy("{name}", {{
    from: deployer,
    log: true,
  }});

  console.log(`{name} contract: `, deployed{name}.address);
}};
export default func;
func.id = "deploy_{id}";
func.tags = ["{name}"];
"#,
        name = contract_name,
        id = contract_name.to_lowercase(),
    )
}
