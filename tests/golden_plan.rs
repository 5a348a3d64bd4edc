use scene_director::{generate_plan, plan_fingerprint, DEFAULT_IDEA};

#[test]
fn golden_archivist_plan() {
    let plan = generate_plan(DEFAULT_IDEA);

    assert_eq!(
        plan.logline,
        "Taylor and Emerson navigate lone, archivist, uncovers with a cinematic, grounded, emotionally resonant sensibility."
    );
    assert_eq!(plan.tone, "Cinematic, grounded, emotionally resonant");

    let script = plan
        .script
        .iter()
        .map(|line| (line.speaker.as_str(), line.line.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        script,
        vec![
            (
                "Narrator",
                "Camera drifts in, catching Taylor as they center themselves amid lone & archivist."
            ),
            (
                "Taylor",
                "\"If we misread uncovers & conspiracy, everything fractures.\""
            ),
            (
                "Emerson",
                "\"Then we don't misread it—we choreograph every beat.\""
            ),
            (
                "Taylor",
                "\"Stay sharp. The air feels cinematic, and the world is finally watching.\""
            ),
        ]
    );

    let expected_beats = [
        ["Introduce archivist", "Reveal uncovers", "Provoke conspiracy"],
        ["Collide film", "Challenge reels", "Complicate lone"],
        ["Confront conspiracy", "Transform encoded", "Resolve vintage"],
    ];
    let expected_leads = ["Inciting moment", "Rising conflict", "Climactic turn"];
    let expected_titles = ["Spark", "Escalation", "Resolution"];

    assert_eq!(plan.scenes.len(), 3);
    for (index, scene) in plan.scenes.iter().enumerate() {
        let title = expected_titles[index];
        assert_eq!(scene.title, format!("Scene {}: {title}", index + 1));
        assert_eq!(scene.location, "Converted warehouse staging area");
        assert_eq!(scene.time_of_day, "Midnight");
        assert_eq!(
            scene.visual_palette,
            "futuristic skylines wrapped in low-lying clouds"
        );
        assert_eq!(scene.beats, expected_beats[index]);
        // The idea's own full stop is kept, hence the doubled period.
        assert_eq!(
            scene.logline,
            format!(
                "{} as Taylor and Emerson maneuver through a lone archivist uncovers a conspiracy encoded in vintage film reels..",
                expected_leads[index]
            )
        );
        assert_eq!(
            scene.image_prompt,
            format!(
                "{title} of a cinematic narrative, hyper-realistic photography, featuring Taylor and Emerson, converted warehouse staging area, midnight ambience, futuristic skylines wrapped in low-lying clouds, shot on IMAX 65mm, shallow depth of field, volumetric lighting, fine film grain"
            )
        );
        assert_eq!(
            scene.video_prompt,
            format!(
                "{title} sequence, cinematic video, tracking shot with Steadicam, Taylor and Emerson in converted warehouse staging area, midnight light, futuristic skylines wrapped in low-lying clouds, dynamic camera movement, immersive spatial audio, 24fps, anamorphic lens flares"
            )
        );
    }
}

#[test]
fn golden_fingerprints() {
    let cases = [
        (
            DEFAULT_IDEA,
            "92a3bd7705224eeacaffc46fb5055270301717b4d149ba0c35a2f52f184a0627",
        ),
        (
            "",
            "24bf41acbcf282608ca9bc6ece0f96f47b618b5b22141eaa2a68b5b0d45cf228",
        ),
        (
            "A detective wanders a neon city street",
            "48e218853dd467d16a63e1b772b2889683271f2a231ca0beb93b076738af6123",
        ),
        (
            "A quiet walk through an empty parking lot",
            "b8017cf8fbb0e66b8a671734aef9daf230c350bda1d2068210072c539dfa0b15",
        ),
    ];

    for (idea, expected) in cases {
        let fingerprint = plan_fingerprint(&generate_plan(idea)).expect("fingerprint");
        assert_eq!(
            fingerprint, expected,
            "golden fingerprint mismatch for {idea:?}; plan generation has shifted"
        );
    }
}
