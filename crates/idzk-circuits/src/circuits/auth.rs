//! # Authentication Circuit
//!
//! Proves that the holder of an identity controls one of its authentication
//! keys: the key's claim is in the identity's claims tree, it is not
//! revoked, and it signed the verifier's challenge.
//!
//! Public signals: `challenge`, `userState`, `userID`.
//!
//! Merkle paths are padded to [`AUTHENTICATION_LEVELS`].

use serde::Serialize;

use idzk_core::{BigUint, Claim, Hash, Id, Signature};

use crate::error::{DecodeError, RegistryError, WitnessError};
use crate::inputs::{field_element, require, ClaimWithProofs};
use crate::marshal::{CircuitMarshaller, CircuitUnmarshaller, WitnessInputs};
use crate::node_aux::{node_aux_value, AuxPresence};
use crate::registry::{CircuitDescriptor, CircuitId, VerificationKey};
use crate::schema::PublicSignalSchema;
use crate::siblings::prepare_siblings_str;
use crate::signals::PublicSignals;

/// Merkle depth of the authentication circuit.
pub const AUTHENTICATION_LEVELS: usize = 40;

/// Groth16 verification key of the authentication circuit.
pub const AUTHENTICATION_VERIFICATION_KEY: &str = r#"{"protocol":"groth16","curve":"bn128","nPublic":3,"vk_alpha_1":["20491192805390485299153009773594534940189261866228447918068658471970481763042","9383485363053290200918347156157836566562967994039712273449902621266178545958","1"],"vk_beta_2":[["6375614351688725206403948262868962793625744043794305715222011528459656738731","4252822878758300859123897981450591353533073413197771768651442665752259397132"],["10505242626370262277552901082094356697409835680220590971873171140371331206856","21847035105528745403288232691147584728191162732299865338377159692350059136679"],["1","0"]],"vk_gamma_2":[["10857046999023057135944570762232829481370756359578518086990519993285655852781","11559732032986387107991004021392285783925812861821192530917403151452391805634"],["8495653923123431417604973247489272438418190587263600148770280649306958101930","4082367875863433681332203403145435568316851327593401208105741076214120093531"],["1","0"]],"vk_delta_2":[["21186122754510938844473484121803028805768823868659420429167031962104213452669","11531036153408267367981904689583322772277231048216817576309813840083888223526"],["10692495955024261993776637845359675478723917354154593765559727707373795521628","4488222557627980933779869049485361123419155363899313279650131295533574955936"],["1","0"]],"vk_alphabeta_12":[[["2029413683389138792403550203267699914886160938906632433982220835551125967885","21072700047562757817161031222997517981543347628379360635925549008442030252106"],["5940354580057074848093997050200682056184807770593307860589430076672439820312","12156638873931618554171829126792193045421052652279363021382169897324752428276"],["7898200236362823042373859371574133993780991612861777490112507062703164551277","7074218545237549455313236346927434013100842096812539264420499035217050630853"]],[["7077479683546002997211712695946002074877511277312570035766170199895071832130","10093483419865920389913245021038182291233451549023025229112148274109565435465"],["4595479056700221319381530156280926371456704509942304414423590385166031118820","19831328484489333784475432780421641293929726139240675179672856274388269393268"],["11934129596455521040620786944827826205713621633706285934057045369193958244500","8037395052364110730298837004334506829870972346962140206007064471173334027475"]]],"IC":[["14480256767620451318587913463852985291987730174383323706971686426192206586228","13794842641958534223890803477584411495136489019918046681255402493033902669593","1"],["15899669153041742461768612098706524993401689577923839624297665212120517575519","8416106942975678531708060814592791926993765111819924718825496398881896100576","1"],["21287922739003385816480150654484934434031086395597647322040273495223392444173","7860334010448425278721389847502162976670934187890845446945915828310145702769","1"],["11065398733589914616819940103547091917179463489998190517391929200753651172846","16010781869086024312453962077351326782445934594671040759005152350849483388443","1"]]}"#;

/// Public-signal schema of the authentication circuit.
pub const AUTHENTICATION_PUBLIC_SIGNALS_SCHEMA: &str = r#"{"challenge":0,"userState":1,"userID":2}"#;

/// Descriptor of the authentication circuit.
#[derive(Debug, Clone)]
pub struct AuthCircuit {
    verification_key: VerificationKey,
    schema: PublicSignalSchema,
}

impl AuthCircuit {
    /// Build the descriptor from the built-in key and schema.
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self {
            verification_key: VerificationKey::new(AUTHENTICATION_VERIFICATION_KEY),
            schema: PublicSignalSchema::from_json(AUTHENTICATION_PUBLIC_SIGNALS_SCHEMA)?,
        })
    }
}

impl CircuitDescriptor for AuthCircuit {
    fn circuit_id(&self) -> CircuitId {
        CircuitId::AUTH
    }

    fn verification_key(&self) -> &VerificationKey {
        &self.verification_key
    }

    fn public_signals_schema(&self) -> &PublicSignalSchema {
        &self.schema
    }
}

/// Inputs of the authentication circuit.
#[derive(Debug, Clone, Default)]
pub struct AuthInputs {
    /// The identity proving control of the key.
    pub id: Option<Id>,
    /// The authentication claim with its proofs.
    pub auth_claim: ClaimWithProofs,
    /// Signature over the challenge by the claimed key.
    pub signature: Option<Signature>,
    /// Verifier-chosen challenge.
    pub challenge: Option<BigUint>,
}

// Field names follow the circuit's signal declarations.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthCircuitInputs<'a> {
    user_auth_claim: &'a Claim,
    user_auth_claim_mtp: Vec<String>,
    user_auth_claim_non_rev_mtp: Vec<String>,
    user_auth_claim_non_rev_mtp_aux_hi: Hash,
    user_auth_claim_non_rev_mtp_aux_hv: Hash,
    user_auth_claim_non_rev_mtp_no_aux: AuxPresence,
    challenge: String,
    challenge_signature_r8x: String,
    challenge_signature_r8y: String,
    challenge_signature_s: String,
    user_claims_tree_root: Hash,
    #[serde(rename = "userID")]
    user_id: String,
    user_rev_tree_root: Hash,
    user_roots_tree_root: Hash,
    user_state: Hash,
}

impl CircuitMarshaller for AuthInputs {
    const CIRCUIT_ID: CircuitId = CircuitId::AUTH;

    fn circuit_inputs(&self) -> Result<WitnessInputs, WitnessError> {
        let id = require(&self.id, "id")?;
        let signature = require(&self.signature, "signature")?;
        let challenge = require(&self.challenge, "challenge")?;
        let claim = require(&self.auth_claim.claim, "authClaim.claim")?;
        let tree_state = require(&self.auth_claim.tree_state, "authClaim.treeState")?;
        let inclusion = require(&self.auth_claim.inclusion_proof, "authClaim.inclusionProof")?;
        let non_rev_status = require(&self.auth_claim.non_rev_status, "authClaim.nonRevStatus")?;
        let non_rev = require(&non_rev_status.proof, "authClaim.nonRevStatus.proof")?;

        let aux = node_aux_value("userAuthClaimNonRevMtpAux", non_rev.node_aux.as_ref())?;

        let inputs = AuthCircuitInputs {
            user_auth_claim: claim,
            user_auth_claim_mtp: prepare_siblings_str(
                "userAuthClaimMtp",
                inclusion.all_siblings(),
                AUTHENTICATION_LEVELS,
            )?,
            user_auth_claim_non_rev_mtp: prepare_siblings_str(
                "userAuthClaimNonRevMtp",
                non_rev.all_siblings(),
                AUTHENTICATION_LEVELS,
            )?,
            user_auth_claim_non_rev_mtp_aux_hi: aux.key,
            user_auth_claim_non_rev_mtp_aux_hv: aux.value,
            user_auth_claim_non_rev_mtp_no_aux: aux.presence,
            challenge: field_element("challenge", challenge)?,
            challenge_signature_r8x: field_element("challengeSignatureR8x", &signature.r8.x)?,
            challenge_signature_r8y: field_element("challengeSignatureR8y", &signature.r8.y)?,
            challenge_signature_s: field_element("challengeSignatureS", &signature.s)?,
            user_claims_tree_root: tree_state.claims_root,
            user_id: id.to_big_int().to_str_radix(10),
            user_rev_tree_root: tree_state.revocation_root,
            user_roots_tree_root: tree_state.root_of_roots,
            user_state: tree_state.state,
        };

        let witness = match serde_json::to_value(&inputs)? {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(WitnessError::Json(serde::ser::Error::custom(
                    "witness did not serialize to a JSON object",
                )))
            }
        };
        tracing::debug!(
            circuit = %Self::CIRCUIT_ID,
            user_id = %id,
            mtp_depth = inclusion.depth(),
            non_rev_depth = non_rev.depth(),
            "marshaled authentication witness"
        );
        Ok(witness)
    }
}

/// Public outputs of the authentication circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutputs {
    /// The challenge the proof answers.
    pub challenge: BigUint,
    /// Identity state the proof was made against.
    pub user_state: Hash,
    /// The authenticated identity.
    pub user_id: Id,
}

impl CircuitUnmarshaller for AuthOutputs {
    const CIRCUIT_ID: CircuitId = CircuitId::AUTH;

    fn from_public_signals(signals: &PublicSignals<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            challenge: signals.big_int("challenge")?,
            user_state: signals.hash("userState")?,
            user_id: signals.id("userID")?,
        })
    }
}
