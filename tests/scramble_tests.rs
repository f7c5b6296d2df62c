// Host-side tests for the text scramble reveal.

use fx_core::constants::SCRAMBLE_GLYPHS;
use fx_core::ScrambleText;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_to_end(text: &str, seed: u64) -> Vec<(String, bool)> {
    let mut s = ScrambleText::new(text);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut frames = Vec::new();
    for _ in 0..10_000 {
        let f = s.tick(&mut rng);
        let done = f.done;
        frames.push((f.text, done));
        if done {
            break;
        }
    }
    frames
}

#[test]
fn finishes_after_two_ticks_per_char_plus_one() {
    let text = "Systems That Think";
    let frames = run_to_end(text, 1);
    let len = text.chars().count();
    assert_eq!(frames.len(), 2 * len + 1);
    assert_eq!(ScrambleText::new(text).total_ticks(), 2 * len + 1);
    let (last, done) = frames.last().unwrap();
    assert!(*done);
    assert_eq!(last, text);
    assert!(frames[..frames.len() - 1].iter().all(|(_, d)| !d));
}

#[test]
fn revealed_prefix_grows_and_rest_is_glyphs() {
    let text = "Data > Instinct";
    let original: Vec<char> = text.chars().collect();
    let glyphs: Vec<char> = SCRAMBLE_GLYPHS.chars().collect();
    for (k, (frame, _)) in run_to_end(text, 9).iter().enumerate() {
        let chars: Vec<char> = frame.chars().collect();
        assert_eq!(chars.len(), original.len(), "frame {k} changed length");
        let revealed = ((k as f32) * 0.5).ceil() as usize;
        for (i, c) in chars.iter().enumerate() {
            if i < revealed.min(original.len()) {
                assert_eq!(*c, original[i], "frame {k} index {i}");
            } else {
                assert!(glyphs.contains(c), "frame {k}: {c:?} is not a scramble glyph");
            }
        }
    }
}

#[test]
fn multibyte_text_is_scrambled_per_char() {
    let frames = run_to_end("Ωmega—", 4);
    assert_eq!(frames.len(), 2 * 6 + 1);
    assert_eq!(frames.last().unwrap().0, "Ωmega—");
}

#[test]
fn empty_text_is_done_immediately() {
    let frames = run_to_end("", 0);
    assert_eq!(frames, vec![(String::new(), true)]);
}

#[test]
fn finished_scramble_keeps_returning_original() {
    let mut s = ScrambleText::new("ok");
    let mut rng = StdRng::seed_from_u64(2);
    while !s.tick(&mut rng).done {}
    assert!(s.is_finished());
    assert_eq!(s.revealed_len(), 2);
    let again = s.tick(&mut rng);
    assert!(again.done);
    assert_eq!(again.text, "ok");
}

#[test]
fn custom_glyph_set_is_used() {
    let mut s = ScrambleText::with_glyphs("abc", "#");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(s.tick(&mut rng).text, "###");
    assert_eq!(s.tick(&mut rng).text, "a##");
}
