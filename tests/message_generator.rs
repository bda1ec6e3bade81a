use rand::Rng;
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};
use httptext::{
    header::HeaderSet,
    message::{Message, MessageParts, Scheme, SchemeVersion},
    request::{Method, Request},
    response::Response,
};

const PATH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789/-_.~?=&%";
const NAME_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-";
const TEXT_CHARS: &[u8] =
    b" !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

pub fn generate_requests(count: u64) -> Vec<Request> {
    (0..count)
        .map(|round| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(round);

            let method = Method::ALL[rng.random_range(0..Method::ALL.len())];
            let path = format!("/{}", random_string(&mut rng, PATH_CHARS, 0..40));
            let parts = random_parts(&mut rng);

            Request::from_parts(method, path, parts).unwrap()
        })
        .collect()
}

pub fn generate_responses(count: u64) -> Vec<Response> {
    (0..count)
        .map(|round| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(round + 10_000);

            let status_code: u16 = rng.random_range(100..=999);
            let reason_phrase = random_string(&mut rng, TEXT_CHARS, 0..30);
            let parts = random_parts(&mut rng);

            Response::from_parts(status_code, reason_phrase, parts).unwrap()
        })
        .collect()
}

pub fn generate_messages(count: u64) -> Vec<Message> {
    let requests = generate_requests(count).into_iter().map(Message::from);
    let responses = generate_responses(count).into_iter().map(Message::from);

    requests.chain(responses).collect()
}

fn random_parts(rng: &mut Xoshiro256PlusPlus) -> MessageParts {
    let scheme = Scheme::ALL[rng.random_range(0..Scheme::ALL.len())];
    let scheme_version = SchemeVersion::ALL[rng.random_range(0..SchemeVersion::ALL.len())];

    let mut headers = HeaderSet::new();
    let header_count = rng.random_range(0..8);

    for index in 0..header_count {
        // Suffix keeps names distinct regardless of case.
        let name = format!(
            "X{}-{}",
            random_string(rng, NAME_CHARS, 0..12),
            index
        );
        let value = random_string(rng, TEXT_CHARS, 1..60);
        headers.add(name, value).unwrap();
    }

    let mut body = String::new();
    let line_count = rng.random_range(0..6);

    for _ in 0..line_count {
        body.push_str(&random_string(rng, TEXT_CHARS, 0..50));
        body.push('\n');
    }

    MessageParts::with_headers(scheme, scheme_version, headers, body)
}

fn random_string(
    rng: &mut Xoshiro256PlusPlus,
    chars: &[u8],
    length: std::ops::Range<usize>,
) -> String {
    let length = rng.random_range(length);

    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())] as char)
        .collect()
}
