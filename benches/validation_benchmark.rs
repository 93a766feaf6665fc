use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use guest_rsvp::events::{FormEvent, FormEventDispatcher};
use guest_rsvp::form::{validate_all, Attendance, FieldId, FormValues, GuestForm};

fn benchmark_validate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_all");
    group.throughput(Throughput::Elements(1));

    let valid = FormValues {
        name: "Ada".to_string(),
        mail: "ada@example.com".to_string(),
        age: "30".to_string(),
        guest_name: "Charles".to_string(),
        qn: String::new(),
    };
    let invalid = FormValues {
        mail: "ada@example".to_string(),
        age: "150".to_string(),
        ..FormValues::default()
    };

    group.bench_function("valid_with_guest", |b| {
        b.iter(|| validate_all(black_box(&valid), black_box(true)))
    });

    group.bench_function("invalid_without_guest", |b| {
        b.iter(|| validate_all(black_box(&invalid), black_box(false)))
    });

    group.finish();
}

fn benchmark_event_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_dispatch");
    group.throughput(Throughput::Elements(100));

    group.bench_function("typing_then_submit", |b| {
        b.iter(|| {
            let mut form = GuestForm::new();
            let mut dispatcher = FormEventDispatcher::new(128);
            let mut typed = String::new();
            for ch in "Ada Lovelace".chars().cycle().take(30) {
                typed.push(ch);
                dispatcher.emit(FormEvent::input(FieldId::Name, typed.clone()), "bench");
            }
            dispatcher.emit(FormEvent::input(FieldId::Mail, "ada@example.com"), "bench");
            dispatcher.emit(FormEvent::input(FieldId::Age, "30"), "bench");
            dispatcher.emit(FormEvent::AttendanceSelected(Attendance::No), "bench");
            dispatcher.emit(FormEvent::Submit, "bench");
            dispatcher.process_all_events(black_box(&mut form))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_validate_all, benchmark_event_dispatch);
criterion_main!(benches);
