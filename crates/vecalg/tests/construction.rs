use vecalg::*;

struct Fixture {
    v12: Vec2i,
    v34: Vec2i,
    v567: Vec3i,
    v890: Vec3i,
}

impl Fixture {
    fn new() -> Self {
        Self {
            v12: vec2(1, 2),
            v34: vec2(3, 4),
            v567: vec3(5, 6, 7),
            v890: vec3(8, 9, 0),
        }
    }
}

#[test]
fn default_constructor() {
    let a = Vector::<i32, 3>::default();
    let b = Vector::<f32, 2>::default();
    let c = Vector::<i8, 4>::default();
    assert_eq!(a, [0; 3]);
    assert_eq!(b, [0.0; 2]);
    assert_eq!(c, [0; 4]);
}

#[test]
fn single_value_constructor() {
    let v = Vector::<i32, 4>::splat(7);
    assert_eq!(v, [7, 7, 7, 7]);

    let w = Vector::<i32, 3>::broadcast(8u8);
    assert_eq!(w, [8, 8, 8]);
}

#[test]
fn n_value_constructor() {
    let c: i8 = 1;
    let v = Vector::<i32, 4>::new((3, 2.0, c, 0 * c));
    assert_eq!(v, [3, 2, 1, 0]);
}

#[test]
fn vec_constructor() {
    let v = Vector::<f32, 4>::new((3, 2, 1, 0));
    let w = Vector::<i32, 4>::new(v);
    assert_eq!(w, [3, 2, 1, 0]);

    let x = vec2(9, 8);
    let y = vec2(7, 6);
    assert_eq!(Vector::<i32, 4>::new((x, y)), [9, 8, 7, 6]);
    assert_eq!(Vector::<i32, 3>::new((1, x)), [1, 9, 8]);
    assert_eq!(Vector::<i32, 3>::new((y, 5)), [7, 6, 5]);
}

#[test]
fn swizzle_construction() {
    let Fixture {
        v12, v34, v567, ..
    } = Fixture::new();

    assert_eq!(Vec4i::new((v12.xx(), v12.yy())), [1, 1, 2, 2]);
    assert_eq!(Vec4i::new((v12.xy(), v34.xy())), [1, 2, 3, 4]);
    assert_eq!(Vec3i::new(v567.zyx()), [7, 6, 5]);
    assert_eq!(Vec3i::new(v12.yyy()), [2, 2, 2]);
    assert_eq!(Vec4i::new((0, v12.xxx())), [0, 1, 1, 1]);
}

#[test]
fn swizzle_assignment() {
    let Fixture { mut v567, v890, .. } = Fixture::new();

    v567 = v567.zyx().into();
    assert_eq!(v567, [7, 6, 5]);

    v567.set(v890.yzx());
    assert_eq!(v567, [9, 0, 8]);

    v567.swizzle_assign::<pattern::YZX>();
    assert_eq!(v567, [0, 8, 9]);

    v567.xz_mut().set(v890.zx());
    assert_eq!(v567, [0, 8, 8]);
}

#[test]
fn composition() {
    let Fixture { v12, v890, .. } = Fixture::new();

    let v = vector![v12, v890.zz()];
    assert_eq!(v, Vec4i::new((1, 2, 0, 0)));

    let v = vector![0.5f32, v12.yx(), v890];
    let _: &Vector<f32, 6> = &v;
    assert_eq!(v, [0.5, 2.0, 1.0, 8.0, 9.0, 0.0]);
}

#[test]
fn promotion() {
    let Fixture { v12, .. } = Fixture::new();

    let f: Vec2f = v12 + vec2(0.5f32, 0.5);
    assert_eq!(f, [1.5, 2.5]);

    let d: Vec2d = vec2(0.5f32, 0.5) * 2.0f64;
    assert_eq!(d, [1.0, 1.0]);

    let mixed: Vector<u32, 2> = v12 + vec2(1u32, 1);
    assert_eq!(mixed, [2, 3]);
}

#[test]
fn narrow_mixed_sign_promotion() {
    let bytes: Vector<i32, 2> = vec2(-1i8, 100) + vec2(0u8, 100);
    assert_eq!(bytes, [-1, 200]);

    let shorts: Vector<i32, 2> = vec2(-1i16, 0) + vec2(0u16, 40000);
    assert_eq!(shorts, [-1, 40000]);

    let mut v = vec2(10u8, 20);
    v -= vec2(-5i8, 5);
    assert_eq!(v, [15, 15]);
}
