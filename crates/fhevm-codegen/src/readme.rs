//! README for a materialized standalone project

use fhevm_catalog::ExampleEntry;

const FRONTEND_SECTION: &str = r#"
## Frontend (Optional)

This example includes an optional Next.js frontend template.

1. **Install frontend dependencies**
   ```bash
   cd frontend
   npm install
   ```

2. **Sync contract ABI**
   ```bash
   npm run sync-abi
   ```

3. **Configure and Run**
   Edit `.env.local` with your deployed contract address, then:
   ```bash
   npm run dev
   ```
"#;

pub fn project_readme(entry: &ExampleEntry, contract_name: &str, include_frontend: bool) -> String {
    let frontend = if include_frontend { FRONTEND_SECTION } else { "" };

    format!(
        r#"# {title}

FHEVM example `{key}` ({category}, {difficulty}).

{description}

## Quick Start

### Prerequisites

- **Node.js**: Version 20 or higher
- **npm**: Package manager

### Installation

1. **Install dependencies**

   ```bash
   npm install
   ```

2. **Set up environment variables**

   Copy `.env.example` to `.env` and update as needed, or use Hardhat vars.

3. **Compile and test**

   ```bash
   npm run compile
   npm run test
   ```
{frontend}
## Contract

The main contract is `{contract}` located in `contracts/{contract}.sol`.

## Interact Without Frontend

This project includes an auto-generated quick-interact script that exercises
every public function of `{contract}` straight from the terminal.

### Method 1: Quick Interact Script (Recommended)

```bash
# Start local blockchain
npx hardhat node

# In another terminal, run the script
npx hardhat run scripts/quick-interact.ts --network localhost
```

### Method 2: Hardhat Console

```bash
npx hardhat console --network localhost

> const contract = await ethers.getContractAt('{contract}', '<deployed-address>')
```

### Method 3: Run Tests

```bash
npm run test
```

## Deployment

Deploy to local network:

```bash
npx hardhat node
npx hardhat deploy --network localhost
```

Deploy to Sepolia:

```bash
npx hardhat deploy --network sepolia
npx hardhat verify --network sepolia <CONTRACT_ADDRESS>
```

## Documentation

- [FHEVM Documentation](https://docs.zama.ai/fhevm)
- [FHEVM Examples](https://docs.zama.org/protocol/examples)
- [FHEVM Hardhat Plugin](https://docs.zama.ai/protocol/solidity-guides/development-guide/hardhat)

## License

This project is licensed under the BSD-3-Clause-Clear License.
"#,
        title = entry.title,
        key = entry.key,
        category = entry.category,
        difficulty = entry.difficulty,
        description = entry.description,
        frontend = frontend,
        contract = contract_name,
    )
}
