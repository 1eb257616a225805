use anchor_lang::{AnchorDeserialize, InstructionData};
use litesvm::LiteSVM;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_program,
    transaction::Transaction,
};
use voting::ProposalView;

struct Harness {
    svm: LiteSVM,
    program_id: Pubkey,
}

impl Harness {
    fn new() -> Self {
        let mut svm = LiteSVM::new();
        let program_id = Pubkey::new_from_array(voting::ID.to_bytes());
        let program_path = format!(
            "{}/../../target/deploy/voting.so",
            env!("CARGO_MANIFEST_DIR")
        );
        svm.add_program_from_file(program_id, &program_path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", program_path, e));
        Harness { svm, program_id }
    }

    fn wallet(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.svm.airdrop(&keypair.pubkey(), 10_000_000_000).unwrap();
        keypair
    }

    fn registry(&self) -> Pubkey {
        Pubkey::find_program_address(&[b"registry"], &self.program_id).0
    }

    fn proposal(&self, id: u64) -> Pubkey {
        Pubkey::find_program_address(&[b"proposal", &id.to_le_bytes()], &self.program_id).0
    }

    fn ballot(&self, id: u64, voter: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[b"ballot", &id.to_le_bytes(), voter.as_ref()],
            &self.program_id,
        )
        .0
    }

    fn send(
        &mut self,
        signer: &Keypair,
        data: Vec<u8>,
        accounts: Vec<AccountMeta>,
    ) -> Result<Vec<u8>, Vec<String>> {
        let instruction = Instruction::new_with_bytes(self.program_id, &data, accounts);
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&signer.pubkey()),
            &[signer],
            self.svm.latest_blockhash(),
        );
        let result = self
            .svm
            .send_transaction(transaction)
            .map(|meta| meta.return_data.data)
            .map_err(|failed| failed.meta.logs);
        self.svm.expire_blockhash();
        result
    }

    fn initialize(&mut self, payer: &Keypair) {
        let accounts = vec![
            AccountMeta::new(payer.pubkey(), true),
            AccountMeta::new(self.registry(), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        self.send(payer, voting::instruction::Initialize {}.data(), accounts)
            .unwrap();
    }

    fn create_proposal(&mut self, creator: &Keypair, id: u64, title: &str) -> u64 {
        let accounts = vec![
            AccountMeta::new(creator.pubkey(), true),
            AccountMeta::new(self.registry(), false),
            AccountMeta::new(self.proposal(id), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let data = voting::instruction::CreateProposal {
            title: title.to_string(),
        }
        .data();
        let output = self.send(creator, data, accounts).unwrap();
        u64::try_from_slice(&output).unwrap()
    }

    fn vote(&mut self, voter: &Keypair, proposal_id: u64, choice: bool) -> Result<bool, Vec<String>> {
        let accounts = vec![
            AccountMeta::new(voter.pubkey(), true),
            AccountMeta::new(self.proposal(proposal_id), false),
            AccountMeta::new(self.ballot(proposal_id, &voter.pubkey()), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let data = voting::instruction::Vote {
            proposal_id,
            choice,
        }
        .data();
        let output = self.send(voter, data, accounts)?;
        Ok(bool::try_from_slice(&output).unwrap())
    }

    fn close(&mut self, caller: &Keypair, proposal_id: u64) -> Result<bool, Vec<String>> {
        let accounts = vec![
            AccountMeta::new_readonly(caller.pubkey(), true),
            AccountMeta::new(self.proposal(proposal_id), false),
        ];
        let data = voting::instruction::Close { proposal_id }.data();
        let output = self.send(caller, data, accounts)?;
        Ok(bool::try_from_slice(&output).unwrap())
    }

    fn get_proposal(&mut self, caller: &Keypair, proposal_id: u64) -> Option<ProposalView> {
        let accounts = vec![AccountMeta::new_readonly(self.proposal(proposal_id), false)];
        let data = voting::instruction::GetProposal { proposal_id }.data();
        let output = self.send(caller, data, accounts).unwrap();
        Option::<ProposalView>::try_from_slice(&output).unwrap()
    }
}

fn key(pubkey: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(pubkey.to_bytes())
}

#[tokio::test]
#[ignore = "needs target/deploy/voting.so from `anchor build`"]
async fn test_create_proposal_and_vote() {
    let mut h = Harness::new();
    let deployer = h.wallet();
    let alice = h.wallet();
    let bob = h.wallet();

    h.initialize(&deployer);
    assert_eq!(h.create_proposal(&alice, 1, "Should we add a community fund?"), 1);

    assert!(h.vote(&alice, 1, true).unwrap());
    assert!(h.vote(&bob, 1, false).unwrap());

    assert_eq!(
        h.get_proposal(&deployer, 1),
        Some(ProposalView {
            creator: key(&alice.pubkey()),
            title: "Should we add a community fund?".to_string(),
            yes: 1,
            no: 1,
            open: true,
        })
    );

    let logs = h.vote(&bob, 1, true).unwrap_err();
    assert!(logs.iter().any(|line| line.contains("AlreadyVoted")));
}

#[tokio::test]
#[ignore = "needs target/deploy/voting.so from `anchor build`"]
async fn test_creator_can_close() {
    let mut h = Harness::new();
    let alice = h.wallet();
    let bob = h.wallet();

    h.initialize(&alice);
    assert_eq!(h.create_proposal(&alice, 1, "Close test"), 1);

    let logs = h.close(&bob, 1).unwrap_err();
    assert!(logs.iter().any(|line| line.contains("Unauthorized")));

    assert!(h.close(&alice, 1).unwrap());

    assert_eq!(
        h.get_proposal(&alice, 1),
        Some(ProposalView {
            creator: key(&alice.pubkey()),
            title: "Close test".to_string(),
            yes: 0,
            no: 0,
            open: false,
        })
    );

    let logs = h.vote(&bob, 1, true).unwrap_err();
    assert!(logs.iter().any(|line| line.contains("ProposalClosed")));
}

#[tokio::test]
#[ignore = "needs target/deploy/voting.so from `anchor build`"]
async fn test_unknown_proposal_reads_as_none() {
    let mut h = Harness::new();
    let alice = h.wallet();
    h.initialize(&alice);

    assert_eq!(h.get_proposal(&alice, 42), None);
}

#[tokio::test]
#[ignore = "needs target/deploy/voting.so from `anchor build`"]
async fn test_unknown_proposal_is_not_found() {
    let mut h = Harness::new();
    let alice = h.wallet();
    h.initialize(&alice);
    h.create_proposal(&alice, 1, "Real one");

    let logs = h.vote(&alice, 7, true).unwrap_err();
    assert!(logs.iter().any(|line| line.contains("AccountNotInitialized")));

    let logs = h.close(&alice, 7).unwrap_err();
    assert!(logs.iter().any(|line| line.contains("AccountNotInitialized")));

    assert_eq!(h.get_proposal(&alice, 7), None);
}
