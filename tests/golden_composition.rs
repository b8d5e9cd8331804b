use pagecraft_core::composition::ContentComposer;
use pagecraft_core::engine::Engine;
use pagecraft_core::rng::{derive_seed, new_stream, DeterministicStream};
use pagecraft_core::tokens::TokenRepository;

const AUSTIN: &str = "https://x/services/agentic-seo/austin-tx/";
const DENVER: &str = "https://x/services/local-seo/denver-co/";

#[test]
fn golden_stream_draws() {
    // Frozen: ChaCha8 seeded with seed_from_u64(1_386_145_970).
    let mut stream = new_stream(derive_seed(AUSTIN));
    let draws: Vec<u64> = (0..40).map(|_| stream.next_u64()).collect();

    assert_eq!(
        &draws[..4],
        &[
            3_594_142_314_475_300_120,
            4_551_526_094_879_325_471,
            2_568_231_140_605_929_227,
            9_419_651_444_704_569_951,
        ]
    );
    // Across the first buffer refill.
    assert_eq!(
        &draws[31..34],
        &[
            2_144_719_527_204_736_542,
            7_019_020_298_305_013_447,
            3_271_157_104_698_524_552,
        ]
    );
}

#[test]
fn golden_selection_draw_order() {
    let repo = TokenRepository::embedded().unwrap();
    let composer = ContentComposer::default();
    let merged = repo.base.merge(repo.service("agentic-seo").unwrap());
    let city = repo.city("austin-tx").unwrap();

    let mut stream = new_stream(derive_seed(AUSTIN));
    let sel = composer.select(&repo.base, &merged, city, &mut stream);

    assert_eq!(
        sel.angles,
        [
            "Topical depth built around real customer questions",
            "Content shaped for AI agents that research on a buyer's behalf",
            "Answer-first page structure that AI assistants can quote",
        ]
    );
    assert_eq!(
        sel.process,
        [
            "Test how assistants currently describe your business",
            "Rewrite priority pages with answer-first structure",
            "Publish structured data that matches each page's intent",
            "Map the questions your buyers ask before they call",
        ]
    );
    assert_eq!(
        sel.benefits,
        [
            "more qualified calls",
            "pages that convert on mobile",
            "higher map pack visibility",
            "clear reporting you can act on",
        ]
    );
    assert_eq!(
        sel.proof,
        [
            "Schema validated against each page's intent",
            "Content written by people who know your market",
            "No long onboarding queues",
            "Transparent reporting dashboards",
            "Month-to-month agreements",
        ]
    );
    assert_eq!(
        sel.sentences,
        [
            "We build pages that answer the question first and sell second.",
            "Results compound when each page has one clear job.",
            "Our clients stay because the numbers keep moving.",
            "Every recommendation is tied to a measurable outcome.",
            "You always know what we are working on and why.",
        ]
    );
    assert_eq!(
        sel.local,
        [
            "Austin buyers compare options on their phones before they ever call.",
            "Tech-savvy Austin customers expect fast, clear answers.",
        ]
    );
    assert_eq!(sel.nearby, ["Round Rock", "Cedar Park", "Georgetown", "Pflugerville"]);
    assert_eq!(sel.cta.as_deref(), Some("Book a free visibility review"));
}

#[test]
fn golden_bundle_agentic_seo_austin() {
    let engine = Engine::embedded().unwrap();
    let bundle = engine.compose("agentic-seo", "austin-tx", AUSTIN);

    assert_eq!(
        bundle.intro,
        "Agentic SEO in Austin, TX. We build pages that answer the question first and sell second. \
         Results compound when each page has one clear job."
    );
    assert_eq!(
        bundle.angles,
        "<ul class=\"angles\"><li>Topical depth built around real customer questions</li>\
         <li>Content shaped for AI agents that research on a buyer&#039;s behalf</li>\
         <li>Answer-first page structure that AI assistants can quote</li></ul>"
    );
    assert_eq!(
        bundle.outcomes,
        "What Agentic SEO delivers in Austin, TX: more qualified calls, pages that convert on mobile, \
         higher map pack visibility and clear reporting you can act on. \
         Our clients stay because the numbers keep moving."
    );
    assert_eq!(
        bundle.locals,
        "Austin buyers compare options on their phones before they ever call. \
         Tech-savvy Austin customers expect fast, clear answers."
    );
    assert_eq!(
        bundle.process,
        "<ol class=\"process\"><li>Test how assistants currently describe your business</li>\
         <li>Rewrite priority pages with answer-first structure</li>\
         <li>Publish structured data that matches each page&#039;s intent</li>\
         <li>Map the questions your buyers ask before they call</li></ol>\
         <p>Every recommendation is tied to a measurable outcome.</p>"
    );
    assert_eq!(
        bundle.proof,
        "<ul class=\"proof\"><li>Schema validated against each page&#039;s intent</li>\
         <li>Content written by people who know your market</li>\
         <li>No long onboarding queues</li><li>Transparent reporting dashboards</li>\
         <li>Month-to-month agreements</li></ul>\
         <p>You always know what we are working on and why.</p>"
    );
    assert_eq!(
        bundle.nearby,
        "Also serving Round Rock, Cedar Park, Georgetown and Pflugerville."
    );
    assert_eq!(bundle.cta, "Book a free visibility review");
    assert_eq!(
        bundle.faq_local,
        "How does Agentic SEO work for businesses in Austin, TX? \
         Austin buyers compare options on their phones before they ever call."
    );

    assert_eq!(
        bundle.fingerprint().unwrap().as_str(),
        "sha256:9b42d48654bb26c96db2bb9642387743b58373ea033c980eb6484e5fe576444c"
    );
}

#[test]
fn golden_bundle_fingerprint_local_seo_denver() {
    let engine = Engine::embedded().unwrap();
    let bundle = engine.compose("local-seo", "denver-co", DENVER);

    assert_eq!(bundle.cta, "Talk to a strategist today");
    assert_eq!(bundle.nearby, "Also serving Aurora, Lakewood and Boulder.");
    assert_eq!(
        bundle.fingerprint().unwrap().as_str(),
        "sha256:d52cba98040c5dcdec9af8a0a232e6a608d881ce9e5d8272d163eda17b3476b7"
    );
}
