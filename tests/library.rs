use scytale::ciphers::{caesar, playfair, rail_fence, transposition, vigenere};
use scytale::ciphers::{Caesar, Playfair, PlayfairMatrix, RailFence};
use scytale::request::{handle, CipherRequest};
use scytale::{build_cipher, Algorithm, Cipher, CipherError, Operation};
use std::error::Error;
use std::sync::Arc;
use std::thread;

#[test]
fn reference_vectors() -> Result<(), Box<dyn Error>> {
    assert_eq!(caesar::encrypt("ABC", 1)?, "BCD");
    assert_eq!(caesar::encrypt("XYZ", 3)?, "ABC");
    assert_eq!(vigenere::encrypt("HELLO", "KEY")?, "RIJVS");
    assert_eq!(
        rail_fence::encrypt("WEAREDISCOVEREDFLEEATONCE", 3)?,
        "WECRLTEERDSOEEFEAOCAIVDEN"
    );
    assert_eq!(transposition::encrypt("ATTACKATDAWN", 4)?, "ACDTKATAWATN");

    let matrix = playfair::create_matrix("MONARCHY")?;
    assert_eq!(playfair::encrypt("INSTRUMENTS", &matrix)?, "GATLMZCLRQXA");
    assert_eq!(playfair::decrypt("GATLMZCLRQXA", &matrix)?, "INSTRUMENTSX");
    Ok(())
}

#[test]
fn length_policies() -> Result<(), Box<dyn Error>> {
    let text = "Length stays put, mostly.";
    let n = text.chars().count();
    assert_eq!(caesar::encrypt(text, 9)?.chars().count(), n);
    assert_eq!(vigenere::encrypt(text, "abc")?.chars().count(), n);
    assert_eq!(rail_fence::encrypt(text, 5)?.chars().count(), n);
    assert_eq!(transposition::encrypt(text, 6)?.chars().count(), n);

    // Playfair output is the padded digraph length
    let matrix = playfair::create_matrix("KEYWORD")?;
    let digraphs = playfair::prepare_digraphs(text);
    assert_eq!(playfair::encrypt(text, &matrix)?.len(), digraphs.len() * 2);
    Ok(())
}

#[test]
fn cipher_values_share_across_threads() -> Result<(), Box<dyn Error>> {
    let ciphers: Vec<Arc<dyn Cipher>> = vec![
        Arc::new(Caesar::new(7)),
        Arc::new(RailFence::new(3)?),
        Arc::new(Playfair::new("MONARCHY")?),
    ];

    let handles: Vec<_> = ciphers
        .into_iter()
        .map(|cipher| {
            thread::spawn(move || {
                let text = "THEQUICKBROWNFOXIUMPSOVERTHELAZYDOGS";
                let encrypted = cipher.encrypt(text).unwrap();
                cipher.decrypt(&encrypted).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let plain = handle.join().expect("worker panicked");
        assert!(plain.starts_with("THEQUICKBROWNFOX"));
    }
    Ok(())
}

#[test]
fn error_taxonomy_at_the_boundary() {
    assert!(matches!(
        build_cipher(Algorithm::Caesar, "not a number"),
        Err(CipherError::InvalidKey(_))
    ));
    assert!(matches!(
        build_cipher(Algorithm::Playfair, ""),
        Err(CipherError::InvalidKey(_))
    ));

    let missing = CipherRequest {
        plain_text: Some("HELLO".into()),
        ..Default::default()
    };
    let err = handle(Algorithm::Vigenere, Operation::Encrypt, &missing).unwrap_err();
    assert!(matches!(err, CipherError::MissingKey(_)));
    assert!(err.is_client_error());
}

#[test]
fn matrix_from_json_is_usable() -> Result<(), Box<dyn Error>> {
    let json = r#"[["P","L","A","Y","F"],["I","R","E","X","M"],["B","C","D","G","H"],
                   ["K","N","O","Q","S"],["T","U","V","W","Z"]]"#;
    let matrix: PlayfairMatrix = serde_json::from_str(json)?;
    assert_eq!(matrix, playfair::create_matrix("playfair example")?);

    let cipher = Playfair::with_matrix(matrix);
    assert_eq!(cipher.encrypt("hide the gold")?, "BMODZBXDNAGE");

    let duplicate = json.replace("\"Z\"", "\"P\"");
    assert!(serde_json::from_str::<PlayfairMatrix>(&duplicate).is_err());
    Ok(())
}
