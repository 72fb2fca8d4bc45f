use openssl::pkey::PKey;
use openssl::rsa::Rsa;

/// Fresh RSA key pair as (private PKCS#8 PEM, public PEM).
pub fn generate_keypair() -> (Vec<u8>, Vec<u8>) {
    let rsa = Rsa::generate(2048).unwrap();
    let pkey = PKey::from_rsa(rsa).unwrap();
    let private_key = pkey.private_key_to_pem_pkcs8().unwrap();
    let public_key = pkey.public_key_to_pem().unwrap();

    (private_key, public_key)
}
